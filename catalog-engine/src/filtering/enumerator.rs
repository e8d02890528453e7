//! Facet Enumerator
//!
//! Derives the selectable facet values shown by the filter UI. Always fed the
//! category-scoped subset, so a brand selection never shrinks its own options.

use serde::Serialize;
use shared::models::{DISCOUNT_OPTIONS, PriceBucket, Product, RATING_OPTIONS};
use std::collections::BTreeSet;

/// Distinct brands of `products`, sorted
pub fn enumerate_brands(products: &[&Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.brand.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// All options for the filter UI
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    pub brands: Vec<String>,
    pub price_ranges: Vec<&'static str>,
    pub ratings: Vec<&'static str>,
    pub discounts: Vec<&'static str>,
}

impl FacetOptions {
    /// Brands come from the data, the rest are fixed enumerations
    pub fn from_scoped(products: &[&Product]) -> Self {
        Self {
            brands: enumerate_brands(products),
            price_ranges: PriceBucket::ALL.iter().map(PriceBucket::label).collect(),
            ratings: RATING_OPTIONS.to_vec(),
            discounts: DISCOUNT_OPTIONS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::test_support::{branded, product};

    #[test]
    fn test_brands_distinct_and_sorted() {
        let products = vec![
            branded(product("1", "Polo", 100), "puma"),
            product("2", "Polo", 100),
            branded(product("3", "Polo", 100), "Adidas"),
            branded(product("4", "Polo", 100), "PUMA"),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        assert_eq!(enumerate_brands(&refs), vec!["ADIDAS", "CLASSIC", "PUMA"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(enumerate_brands(&[]).is_empty());
    }

    #[test]
    fn test_fixed_options() {
        let options = FacetOptions::from_scoped(&[]);
        assert_eq!(options.price_ranges.first(), Some(&"Under ₹500"));
        assert_eq!(options.price_ranges.len(), 5);
        assert_eq!(options.ratings[0], "4.0 & above");
        assert_eq!(options.discounts.len(), 7);
    }
}
