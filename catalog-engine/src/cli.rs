//! Command-line query runner

use clap::Parser;
use shared::models::{ALL_TAB, FilterState, NavigationParams, SortKey};

/// Query a category listing from the storefront catalog
#[derive(Debug, Parser)]
#[command(name = "catalog-engine", version)]
pub struct Cli {
    /// Top-level category to open, e.g. "Men"
    #[arg(long)]
    pub category: Option<String>,

    /// Sub-category to open; takes precedence over --category
    #[arg(long)]
    pub sub_category: Option<String>,

    /// Horizontal tab inside the opened category
    #[arg(long, default_value = ALL_TAB)]
    pub tab: String,

    /// relevance | new | price_low | price_high | rating | discount
    #[arg(long, default_value = "relevance")]
    pub sort: SortKey,

    /// Brand to keep (repeatable, case-insensitive)
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Price bucket label, e.g. "Under ₹500" (repeatable)
    #[arg(long = "price")]
    pub prices: Vec<String>,

    /// Rating threshold label, e.g. "4.0 & above" (repeatable)
    #[arg(long = "rating")]
    pub ratings: Vec<String>,

    /// Discount threshold label, e.g. "50% or more" (repeatable)
    #[arg(long = "discount")]
    pub discounts: Vec<String>,

    /// Print the filter options (brands, price, rating, discount) for the
    /// selection instead of the listing
    #[arg(long)]
    pub facets: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    pub fn navigation_params(&self) -> NavigationParams {
        NavigationParams {
            category_name: self.category.clone(),
            sub_category_name: self.sub_category.clone(),
        }
    }

    /// Filter state as the filter UI would build it
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            sort_by: self.sort,
            price_ranges: self.prices.iter().cloned().collect(),
            brands: self.brands.iter().map(|b| b.to_uppercase()).collect(),
            ratings: self.ratings.iter().cloned().collect(),
            discounts: self.discounts.iter().cloned().collect(),
        }
    }
}
