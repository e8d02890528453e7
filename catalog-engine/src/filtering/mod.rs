//! Category-Scoped Catalog Filter
//!
//! Pure, synchronous pipeline over in-memory data:
//! tree resolution → category matching → facet filtering → sorting, with
//! brand options enumerated from the category-scoped subset.

pub mod engine;
pub mod enumerator;
pub mod facets;
pub mod matcher;
pub mod sorter;
pub mod tree;

pub use engine::*;
pub use enumerator::*;
pub use facets::*;
pub use matcher::*;
pub use sorter::*;
pub use tree::*;

#[cfg(test)]
pub(crate) mod test_support;
