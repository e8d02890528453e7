//! Services - catalog data and screen-level listing state

pub mod catalog_store;
pub mod listing;

pub use catalog_store::CatalogStore;
pub use listing::ListingSession;
