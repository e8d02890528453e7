//! Catalog Matcher
//!
//! Logic for scoping the flat catalog to a category label set.

use super::tree::LabelSet;
use shared::models::Product;

/// Check if a product belongs to the label set
///
/// Matches on the leaf label first, then on the first segment of the
/// category path for products that only recorded their top-level ancestry.
/// Both checks are exact string membership.
pub fn matches_category(product: &Product, labels: &LabelSet<'_>) -> bool {
    labels.contains(product.deepest_category_name.as_str())
        || labels.contains(product.category_root_segment())
}

/// Products whose category falls inside `labels`, in catalog order
pub fn match_products<'p>(catalog: &'p [Product], labels: &LabelSet<'_>) -> Vec<&'p Product> {
    if labels.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|product| matches_category(product, labels))
        .collect()
}
