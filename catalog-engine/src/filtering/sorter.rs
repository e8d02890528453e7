//! Listing Sorter

use shared::models::{Product, SortKey};
use std::cmp::Ordering;

/// Highest numeric id first; non-numeric ids go last
fn by_recency(a: &Product, b: &Product) -> Ordering {
    match (a.numeric_id(), b.numeric_id()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order products by `key` without touching the input
///
/// The sort is stable: ties keep their incoming relative order, and
/// [`SortKey::Relevance`] returns the input order unchanged.
pub fn sort_products<'p>(products: &[&'p Product], key: SortKey) -> Vec<&'p Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Relevance => {}
        SortKey::PriceLow => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::New => sorted.sort_by(|a, b| by_recency(a, b)),
        SortKey::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Discount => sorted.sort_by(|a, b| b.discount.total_cmp(&a.discount)),
    }
    sorted
}
