//! Shared types for the storefront catalog
//!
//! Plain data models consumed by the catalog engine and by any presentation
//! layer: the category tree, normalized products, facet filter state and the
//! active category selection.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use models::*;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
