//! Category Model

use serde::{Deserialize, Serialize};

/// One node of the category taxonomy
///
/// `name` is the join key products refer to through
/// `deepest_category_name`. It is matched by exact, case-sensitive string
/// equality and is not guaranteed to be unique across the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// Create a leaf node
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a node with the given children
    pub fn branch(
        id: impl Into<String>,
        name: impl Into<String>,
        children: Vec<CategoryNode>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Labels of the direct children, in order
    pub fn child_labels(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|c| c.name.as_str())
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(CategoryNode::subtree_len).sum::<usize>()
    }
}
