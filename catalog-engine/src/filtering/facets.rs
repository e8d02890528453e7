//! Facet Filter
//!
//! AND across facets, OR within a facet. An empty selection skips the facet.

use shared::models::{FilterState, PriceBucket, Product, parse_leading_number};
use std::collections::BTreeSet;

/// Check the brand facet
pub fn matches_brand(product: &Product, brands: &BTreeSet<String>) -> bool {
    brands.contains(&product.brand)
}

/// Check the price facet against the selected bucket labels
///
/// Unknown bucket labels match nothing.
pub fn matches_price(product: &Product, ranges: &BTreeSet<String>) -> bool {
    ranges
        .iter()
        .filter_map(|label| PriceBucket::from_label(label))
        .any(|bucket| bucket.contains(product.price))
}

/// Check a "value is at least one of the thresholds" facet
fn meets_any_threshold(value: f64, labels: &BTreeSet<String>) -> bool {
    labels
        .iter()
        .filter_map(|label| parse_leading_number(label))
        .any(|threshold| value >= threshold)
}

pub fn matches_rating(product: &Product, ratings: &BTreeSet<String>) -> bool {
    meets_any_threshold(product.rating, ratings)
}

pub fn matches_discount(product: &Product, discounts: &BTreeSet<String>) -> bool {
    meets_any_threshold(product.discount, discounts)
}

/// Narrow `products` by every non-empty facet of `state`
pub fn apply_facets<'p>(products: &[&'p Product], state: &FilterState) -> Vec<&'p Product> {
    let mut result = products.to_vec();

    if !state.brands.is_empty() {
        result.retain(|p| matches_brand(p, &state.brands));
    }
    if !state.price_ranges.is_empty() {
        result.retain(|p| matches_price(p, &state.price_ranges));
    }
    if !state.ratings.is_empty() {
        result.retain(|p| matches_rating(p, &state.ratings));
    }
    if !state.discounts.is_empty() {
        result.retain(|p| matches_discount(p, &state.discounts));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::test_support::{branded, discounted, ids, product, rated};
    use rust_decimal::prelude::ToPrimitive;
    use shared::models::DEFAULT_BRAND;

    fn refs(products: &[Product]) -> Vec<&Product> {
        products.iter().collect()
    }

    fn prices(products: &[&Product]) -> Vec<i64> {
        products
            .iter()
            .filter_map(|p| p.price.to_i64())
            .collect()
    }

    #[test]
    fn test_scenario_under_500() {
        let products = vec![
            product("1", "Polo", 300),
            product("2", "Polo", 500),
            product("3", "Polo", 700),
        ];
        let state = FilterState::new().with_price_range("Under ₹500");
        assert_eq!(prices(&apply_facets(&refs(&products), &state)), vec![300]);
    }

    #[test]
    fn test_scenario_rating_threshold() {
        let products = vec![
            rated(product("1", "Polo", 100), 3.5),
            rated(product("2", "Polo", 100), 4.0),
            rated(product("3", "Polo", 100), 4.8),
        ];
        let state = FilterState::new().with_rating("4.0 & above");
        assert_eq!(ids(&apply_facets(&refs(&products), &state)), vec!["2", "3"]);
    }

    #[test]
    fn test_empty_state_keeps_everything() {
        let products = vec![product("1", "Polo", 100), product("2", "Jeans", 9000)];
        assert_eq!(ids(&apply_facets(&refs(&products), &FilterState::new())), vec!["1", "2"]);
    }

    #[test]
    fn test_brand_defaults_to_classic() {
        let products = vec![product("1", "Polo", 100), branded(product("2", "Polo", 100), "Nike")];
        let state = FilterState::new().with_brand(DEFAULT_BRAND);
        assert_eq!(ids(&apply_facets(&refs(&products), &state)), vec!["1"]);

        let state = FilterState::new().with_brand("NIKE");
        assert_eq!(ids(&apply_facets(&refs(&products), &state)), vec!["2"]);
    }

    #[test]
    fn test_brand_selection_is_exact() {
        let products = vec![branded(product("1", "Polo", 100), "Nike")];
        let state = FilterState::new().with_brand("Nike");
        assert!(apply_facets(&refs(&products), &state).is_empty());
    }

    #[test]
    fn test_boundary_price_lands_in_both_buckets() {
        let products = vec![product("1", "Polo", 1000)];
        for label in ["₹500 - ₹1000", "₹1000 - ₹2000"] {
            let state = FilterState::new().with_price_range(label);
            assert_eq!(ids(&apply_facets(&refs(&products), &state)), vec!["1"], "{label}");
        }
    }

    #[test]
    fn test_unknown_price_label_matches_nothing() {
        let products = vec![product("1", "Polo", 100)];
        let state = FilterState::new().with_price_range("Cheap");
        assert!(apply_facets(&refs(&products), &state).is_empty());
    }

    #[test]
    fn test_discount_threshold() {
        let products = vec![
            discounted(product("1", "Polo", 100), 0.0),
            discounted(product("2", "Polo", 100), 50.0),
            discounted(product("3", "Polo", 100), 49.9),
        ];
        let state = FilterState::new().with_discount("50% or more");
        assert_eq!(ids(&apply_facets(&refs(&products), &state)), vec!["2"]);
    }

    #[test]
    fn test_within_facet_is_union() {
        let products = vec![
            product("1", "Polo", 300),
            product("2", "Polo", 800),
            product("3", "Polo", 3000),
            product("4", "Polo", 9000),
        ];
        let a = FilterState::new().with_price_range("Under ₹500");
        let b = FilterState::new().with_price_range("₹2000 - ₹5000");
        let both = a.clone().with_price_range("₹2000 - ₹5000");

        let mut union = ids(&apply_facets(&refs(&products), &a));
        union.extend(ids(&apply_facets(&refs(&products), &b)));
        union.sort();
        assert_eq!(ids(&apply_facets(&refs(&products), &both)), union);
        assert_eq!(union, vec!["1", "3"]);
    }

    #[test]
    fn test_across_facets_is_intersection() {
        let products = vec![
            branded(rated(product("1", "Polo", 300), 4.5), "Nike"),
            branded(rated(product("2", "Polo", 300), 2.0), "Nike"),
            branded(rated(product("3", "Polo", 300), 4.9), "Puma"),
            rated(product("4", "Polo", 300), 1.0),
        ];
        let brand = FilterState::new().with_brand("NIKE");
        let rating = FilterState::new().with_rating("4.0 & above");
        let combined = brand.clone().with_rating("4.0 & above");

        let by_brand = ids(&apply_facets(&refs(&products), &brand));
        let by_rating = ids(&apply_facets(&refs(&products), &rating));
        let expected: Vec<String> =
            by_brand.into_iter().filter(|id| by_rating.contains(id)).collect();

        assert_eq!(ids(&apply_facets(&refs(&products), &combined)), expected);
        assert_eq!(expected, vec!["1"]);
    }

    #[test]
    fn test_lowest_selected_threshold_decides() {
        let products = vec![rated(product("1", "Polo", 100), 3.2)];
        let state = FilterState::new().with_rating("4.0 & above").with_rating("3.0 & above");
        assert_eq!(ids(&apply_facets(&refs(&products), &state)), vec!["1"]);
    }
}
