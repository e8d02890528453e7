//! Category Tree Resolver
//!
//! Locates a node by label and flattens its subtree into a label set.

use shared::models::CategoryNode;
use std::collections::HashSet;

/// Set of category labels a listing is scoped to
pub type LabelSet<'a> = HashSet<&'a str>;

/// Find the first node whose `name` equals `label`
///
/// At every level all siblings are compared before any of their children are
/// searched. When several nodes share a label the first one reached wins.
pub fn find_node<'a>(tree: &'a [CategoryNode], label: &str) -> Option<&'a CategoryNode> {
    if let Some(hit) = tree.iter().find(|node| node.name == label) {
        return Some(hit);
    }
    tree.iter().find_map(|node| find_node(&node.children, label))
}

/// The node's own label plus the label of every descendant
pub fn collect_labels(node: &CategoryNode) -> LabelSet<'_> {
    let mut labels = LabelSet::new();
    extend_labels(node, &mut labels);
    labels
}

fn extend_labels<'a>(node: &'a CategoryNode, labels: &mut LabelSet<'a>) {
    labels.insert(node.name.as_str());
    for child in &node.children {
        extend_labels(child, labels);
    }
}

/// Resolve a label to its descendant label set
///
/// An unknown or absent label yields an empty set.
pub fn resolve_labels<'a>(tree: &'a [CategoryNode], label: Option<&str>) -> LabelSet<'a> {
    label
        .and_then(|l| find_node(tree, l))
        .map(collect_labels)
        .unwrap_or_default()
}
