//! Catalog Store - static category tree and product catalog
//!
//! Built once at startup and read-only afterwards. Stands in for the external
//! catalog and category services; data comes from JSON files or from the
//! builtin mock data compiled into the binary.

use shared::models::{CategoryNode, Product, RawProduct};
use std::collections::HashSet;
use std::path::Path;

use crate::core::{Config, EngineError, Result};

const BUILTIN_CATEGORIES: &str = include_str!("../../data/categories.json");
const BUILTIN_PRODUCTS: &str = include_str!("../../data/products.json");

/// Immutable in-memory catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    tree: Vec<CategoryNode>,
    products: Vec<Product>,
}

impl CatalogStore {
    /// Store from already normalized data
    pub fn new(tree: Vec<CategoryNode>, products: Vec<Product>) -> Self {
        warn_duplicate_ids(&tree);
        Self { tree, products }
    }

    /// Store holding the builtin mock data
    pub fn builtin() -> Result<Self> {
        Self::from_json_strs(BUILTIN_CATEGORIES, BUILTIN_PRODUCTS)
    }

    /// Parse a category tree and a raw product list
    ///
    /// Product records that fail to deserialize or normalize are skipped
    /// with a warning. Only a malformed document is an error.
    pub fn from_json_strs(tree_json: &str, products_json: &str) -> Result<Self> {
        let tree: Vec<CategoryNode> = serde_json::from_str(tree_json)?;
        let records: Vec<serde_json::Value> = serde_json::from_str(products_json)?;
        Ok(Self::new(tree, normalize_all(records)))
    }

    /// Load from the configured files, falling back to builtin data per file
    pub fn load(config: &Config) -> Result<Self> {
        let tree_json = match &config.category_tree_path {
            Some(path) => read_file(path)?,
            None => BUILTIN_CATEGORIES.to_string(),
        };
        let products_json = match &config.catalog_path {
            Some(path) => read_file(path)?,
            None => BUILTIN_PRODUCTS.to_string(),
        };

        let store = Self::from_json_strs(&tree_json, &products_json)?;
        tracing::info!(
            categories = store.category_count(),
            products = store.products.len(),
            "📦 Catalog loaded"
        );
        Ok(store)
    }

    pub fn tree(&self) -> &[CategoryNode] {
        &self.tree
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of nodes in the whole tree
    pub fn category_count(&self) -> usize {
        self.tree.iter().map(CategoryNode::subtree_len).sum()
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))
}

fn normalize_record(record: serde_json::Value) -> std::result::Result<Product, String> {
    let raw: RawProduct = serde_json::from_value(record).map_err(|e| e.to_string())?;
    raw.normalize().map_err(|e| e.to_string())
}

fn normalize_all(records: Vec<serde_json::Value>) -> Vec<Product> {
    let total = records.len();
    let products: Vec<Product> = records
        .into_iter()
        .filter_map(|record| match normalize_record(record) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!("Skipping product record: {}", e);
                None
            }
        })
        .collect();

    if products.len() < total {
        tracing::warn!(skipped = total - products.len(), "Some product records were invalid");
    }
    products
}

fn warn_duplicate_ids(tree: &[CategoryNode]) {
    fn walk<'a>(nodes: &'a [CategoryNode], seen: &mut HashSet<&'a str>) {
        for node in nodes {
            if !seen.insert(node.id.as_str()) {
                tracing::warn!(id = %node.id, name = %node.name, "Duplicate category id");
            }
            walk(&node.children, seen);
        }
    }
    walk(tree, &mut HashSet::new());
}
