//! Listing Engine
//!
//! Runs the full recomputation for one listing screen:
//! resolve → match → facets → sort, plus brand enumeration off the matched
//! subset.

use serde::Serialize;
use shared::models::{ALL_TAB, ActiveSelection, CategoryNode, FilterState, Product};

use super::enumerator::{FacetOptions, enumerate_brands};
use super::facets::apply_facets;
use super::matcher::match_products;
use super::sorter::sort_products;
use super::tree::{find_node, resolve_labels};

/// Everything a listing screen renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    /// Resolved base category label, `None` when the target is unknown
    pub category: Option<String>,
    /// Active tab
    pub tab: String,
    /// `"All"` followed by the base category's children
    pub tabs: Vec<String>,
    pub products: Vec<Product>,
    /// Brand options for the filter UI, from the category-scoped subset
    pub brand_options: Vec<String>,
    pub total: usize,
}

impl ListingView {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Category-scoped filtering over a borrowed tree and catalog
#[derive(Debug, Clone, Copy)]
pub struct ListingEngine<'a> {
    tree: &'a [CategoryNode],
    catalog: &'a [Product],
}

impl<'a> ListingEngine<'a> {
    pub fn new(tree: &'a [CategoryNode], catalog: &'a [Product]) -> Self {
        Self { tree, catalog }
    }

    /// Base node of the selection, ignoring the tab
    pub fn base_node(&self, selection: &ActiveSelection) -> Option<&'a CategoryNode> {
        selection
            .target_label
            .as_deref()
            .and_then(|label| find_node(self.tree, label))
    }

    /// Products under the selection's effective label, before any facet
    pub fn category_scoped(&self, selection: &ActiveSelection) -> Vec<&'a Product> {
        let labels = resolve_labels(self.tree, selection.effective_label());
        if labels.is_empty() {
            tracing::debug!(
                target_label = ?selection.target_label,
                tab = %selection.tab,
                "Category selection did not resolve, listing is empty"
            );
        }
        match_products(self.catalog, &labels)
    }

    /// Filter UI options for the selection
    pub fn facet_options(&self, selection: &ActiveSelection) -> FacetOptions {
        FacetOptions::from_scoped(&self.category_scoped(selection))
    }

    /// Recompute the listing for the given selection and filter state
    pub fn run(&self, selection: &ActiveSelection, filters: &FilterState) -> ListingView {
        let base = self.base_node(selection);
        let tabs = std::iter::once(ALL_TAB.to_string())
            .chain(base.into_iter().flat_map(|node| node.child_labels().map(str::to_string)))
            .collect();

        let scoped = self.category_scoped(selection);
        let brand_options = enumerate_brands(&scoped);
        let narrowed = apply_facets(&scoped, filters);
        let sorted = sort_products(&narrowed, filters.sort_by);

        tracing::debug!(
            category = ?base.map(|n| n.name.as_str()),
            tab = %selection.tab,
            scoped = scoped.len(),
            result = sorted.len(),
            sort_by = %filters.sort_by,
            "Listing recomputed"
        );

        let products: Vec<Product> = sorted.into_iter().cloned().collect();
        ListingView {
            category: base.map(|n| n.name.clone()),
            tab: selection.tab.clone(),
            tabs,
            total: products.len(),
            products,
            brand_options,
        }
    }
}
