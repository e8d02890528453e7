//! Error types for the shared crate
//!
//! Only the ingestion boundary can fail. Filtering itself is total.

use thiserror::Error;

/// Model-level errors raised while normalizing or parsing raw data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A product record violates a field invariant
    #[error("invalid product {product_id}: {field} {reason}")]
    InvalidField {
        product_id: String,
        field: &'static str,
        reason: String,
    },

    /// A product record carries no usable identifier
    #[error("product record has no id")]
    MissingId,

    /// Sort key name not in the known set
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
}

impl ModelError {
    pub fn invalid(
        product_id: impl Into<String>,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            product_id: product_id.into(),
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;
