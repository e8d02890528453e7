//! Data models
//!
//! Shared between the catalog engine and presentation consumers.
//! Raw records are normalized once at ingestion; everything downstream
//! works on the normalized types.

pub mod category;
pub mod filter;
pub mod product;
pub mod selection;

// Re-exports
pub use category::*;
pub use filter::*;
pub use product::*;
pub use selection::*;
