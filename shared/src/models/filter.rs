//! Facet Filter Model
//!
//! User-selected facet and sort state for a product listing. An empty facet
//! set means "no restriction on that facet", never "match nothing".

use crate::error::ModelError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Listing sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Catalog order, untouched
    #[default]
    Relevance,
    /// Highest numeric id first
    New,
    PriceLow,
    PriceHigh,
    Rating,
    Discount,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Relevance,
        SortKey::New,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
        SortKey::Discount,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::New => "new",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
            SortKey::Rating => "rating",
            SortKey::Discount => "discount",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSortKey(s.to_string()))
    }
}

/// Canonical price buckets offered by the filter UI
///
/// Bounds are inclusive on both ends for the middle buckets, so the values
/// 500, 1000, 2000 and 5000 fall into two adjacent buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBucket {
    Under500,
    From500To1000,
    From1000To2000,
    From2000To5000,
    Above5000,
}

impl PriceBucket {
    /// Display order
    pub const ALL: [PriceBucket; 5] = [
        PriceBucket::Under500,
        PriceBucket::From500To1000,
        PriceBucket::From1000To2000,
        PriceBucket::From2000To5000,
        PriceBucket::Above5000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriceBucket::Under500 => "Under ₹500",
            PriceBucket::From500To1000 => "₹500 - ₹1000",
            PriceBucket::From1000To2000 => "₹1000 - ₹2000",
            PriceBucket::From2000To5000 => "₹2000 - ₹5000",
            PriceBucket::Above5000 => "Above ₹5000",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        PriceBucket::ALL.into_iter().find(|b| b.label() == label)
    }

    pub fn contains(&self, price: Decimal) -> bool {
        let (lo, hi) = match self {
            PriceBucket::Under500 => return price < Decimal::from(500),
            PriceBucket::Above5000 => return price > Decimal::from(5000),
            PriceBucket::From500To1000 => (500, 1000),
            PriceBucket::From1000To2000 => (1000, 2000),
            PriceBucket::From2000To5000 => (2000, 5000),
        };
        price >= Decimal::from(lo) && price <= Decimal::from(hi)
    }
}

/// Rating threshold options, best first
pub const RATING_OPTIONS: [&str; 4] = ["4.0 & above", "3.0 & above", "2.0 & above", "1.0 & above"];

/// Discount threshold options, smallest first
pub const DISCOUNT_OPTIONS: [&str; 7] = [
    "10% or more",
    "20% or more",
    "30% or more",
    "40% or more",
    "50% or more",
    "60% or more",
    "70% or more",
];

/// Read the leading decimal number of a threshold label
///
/// `"4.0 & above"` → `4.0`, `"50% or more"` → `50.0`. Labels without a
/// leading number yield `None` and never satisfy a threshold.
pub fn parse_leading_number(label: &str) -> Option<f64> {
    let s = label.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            '-' | '+' if i == 0 => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Facet and sort selection for one listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub sort_by: SortKey,
    /// Selected price bucket labels
    pub price_ranges: BTreeSet<String>,
    /// Selected brands, upper-cased
    pub brands: BTreeSet<String>,
    /// Selected rating threshold labels
    pub ratings: BTreeSet<String>,
    /// Selected discount threshold labels
    pub discounts: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_by = key;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    pub fn with_price_range(mut self, label: impl Into<String>) -> Self {
        self.price_ranges.insert(label.into());
        self
    }

    pub fn with_rating(mut self, label: impl Into<String>) -> Self {
        self.ratings.insert(label.into());
        self
    }

    pub fn with_discount(mut self, label: impl Into<String>) -> Self {
        self.discounts.insert(label.into());
        self
    }

    /// Number of facets with at least one selection
    pub fn active_facet_count(&self) -> usize {
        [&self.price_ranges, &self.brands, &self.ratings, &self.discounts]
            .into_iter()
            .filter(|facet| !facet.is_empty())
            .count()
    }

    /// True when no facet restricts the listing (sort order is ignored)
    pub fn is_unfiltered(&self) -> bool {
        self.active_facet_count() == 0
    }
}
