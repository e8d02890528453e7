//! Product Model

use crate::error::{ModelError, ModelResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Brand used when a product carries no subtitle
pub const DEFAULT_BRAND: &str = "CLASSIC";

/// Product identifier as found in mock/API payloads (string or number)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(u64),
    Signed(i64),
    Float(f64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
            RawId::Signed(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        }
    }
}

/// Product record as delivered by the catalog source
///
/// Field names follow the source payloads: `id`/`productId` and
/// `name`/`productName` are both accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default, alias = "productId")]
    pub id: Option<RawId>,
    #[serde(default, alias = "productName")]
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub original_price: Option<Decimal>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub category_path: String,
    #[serde(default)]
    pub deepest_category_name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl RawProduct {
    /// Fill defaults and check field invariants
    ///
    /// Missing `rating`/`discount` become `0`; the brand is the upper-cased
    /// subtitle, or [`DEFAULT_BRAND`] when there is none.
    pub fn normalize(self) -> ModelResult<Product> {
        let id = match self.id.map(RawId::into_string) {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(ModelError::MissingId),
        };

        if self.price < Decimal::ZERO {
            return Err(ModelError::invalid(
                id,
                "price",
                format!("must be >= 0, got {}", self.price),
            ));
        }
        if let Some(original) = self.original_price
            && original < self.price
        {
            return Err(ModelError::invalid(
                id,
                "originalPrice",
                format!("{} is below price {}", original, self.price),
            ));
        }

        let discount = self.discount.unwrap_or(0.0);
        if !(0.0..=100.0).contains(&discount) {
            return Err(ModelError::invalid(
                id,
                "discount",
                format!("must be within 0-100, got {discount}"),
            ));
        }

        let rating = self.rating.unwrap_or(0.0);
        if !(0.0..=5.0).contains(&rating) {
            return Err(ModelError::invalid(
                id,
                "rating",
                format!("must be within 0-5, got {rating}"),
            ));
        }

        let brand = self
            .subtitle
            .as_deref()
            .unwrap_or(DEFAULT_BRAND)
            .to_uppercase();

        Ok(Product {
            id,
            name: self.name,
            price: self.price,
            original_price: self.original_price,
            discount,
            rating,
            category_path: self.category_path,
            deepest_category_name: self.deepest_category_name,
            subtitle: self.subtitle,
            brand,
            images: self.images,
        })
    }
}

/// Normalized product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<Decimal>,
    /// Discount in percent (0-100)
    pub discount: f64,
    /// Average rating (0-5)
    pub rating: f64,
    /// Hyphen-joined ancestry slug, e.g. "Men-Topwear-T-Shirts"
    pub category_path: String,
    /// Label of the leaf category this product is filed under
    pub deepest_category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Upper-cased brand facet value
    pub brand: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// First hyphen-delimited segment of `category_path`
    pub fn category_root_segment(&self) -> &str {
        self.category_path.split('-').next().unwrap_or_default()
    }

    /// Numeric value of the id, used as a recency proxy
    ///
    /// Returns `None` for ids that are not numbers.
    pub fn numeric_id(&self) -> Option<f64> {
        self.id.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}
