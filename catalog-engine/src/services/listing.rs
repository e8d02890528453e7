//! Listing Session
//!
//! State owned by one product-listing screen. The session is the only place
//! that mutates selection or filter state; each recomputation hands immutable
//! snapshots to the filtering engine.

use shared::models::{ALL_TAB, ActiveSelection, FilterState, NavigationParams, SortKey};

use super::catalog_store::CatalogStore;
use crate::filtering::{FacetOptions, ListingEngine, ListingView};

#[derive(Debug, Clone, Default)]
pub struct ListingSession {
    selection: ActiveSelection,
    filters: FilterState,
}

impl ListingSession {
    /// Open a listing from navigation parameters with default filters
    pub fn open(params: &NavigationParams) -> Self {
        Self {
            selection: ActiveSelection::from_params(params),
            filters: FilterState::default(),
        }
    }

    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Switch the horizontal tab
    pub fn select_tab(&mut self, tab: impl Into<String>) {
        let tab = tab.into();
        tracing::debug!(%tab, "Tab selected");
        self.selection.tab = tab;
    }

    pub fn reset_tab(&mut self) {
        self.select_tab(ALL_TAB);
    }

    /// Draft state for the filter modal
    ///
    /// The modal always starts from defaults, not from the applied state.
    pub fn open_filters(&self) -> FilterState {
        FilterState::default()
    }

    pub fn apply_filters(&mut self, filters: FilterState) {
        tracing::debug!(
            active_facets = filters.active_facet_count(),
            sort_by = %filters.sort_by,
            "Filters applied"
        );
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.filters.sort_by = key;
    }

    pub fn view(&self, store: &CatalogStore) -> ListingView {
        ListingEngine::new(store.tree(), store.products()).run(&self.selection, &self.filters)
    }

    pub fn facet_options(&self, store: &CatalogStore) -> FacetOptions {
        ListingEngine::new(store.tree(), store.products()).facet_options(&self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        let tree = r#"[{"id":"1","name":"Men","children":[
            {"id":"11","name":"T-Shirts","children":[{"id":"111","name":"Polo"}]},
            {"id":"12","name":"Jeans"}
        ]}]"#;
        let products = r#"[
            {"id":"1","name":"Pique Polo","price":799,"rating":4.3,"subtitle":"Nike",
             "deepestCategoryName":"Polo"},
            {"id":"2","name":"Slim Jeans","price":1999,"discount":40,"deepestCategoryName":"Jeans"},
            {"id":"3","name":"Basic Polo","price":399,"rating":3.9,"deepestCategoryName":"Polo"}
        ]"#;
        CatalogStore::from_json_strs(tree, products).unwrap()
    }

    fn ids(view: &ListingView) -> Vec<&str> {
        view.products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_open_uses_defaults() {
        let session = ListingSession::open(&NavigationParams::category("Men"));
        assert_eq!(session.filters(), &FilterState::default());
        assert!(session.selection().is_all_tab());
        assert_eq!(ids(&session.view(&store())), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_apply_and_clear_filters() {
        let store = store();
        let mut session = ListingSession::open(&NavigationParams::category("Men"));

        session.apply_filters(session.open_filters().with_discount("30% or more"));
        assert_eq!(ids(&session.view(&store)), vec!["2"]);

        session.clear_filters();
        assert_eq!(ids(&session.view(&store)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_open_filters_resets_draft() {
        let mut session = ListingSession::open(&NavigationParams::category("Men"));
        session.apply_filters(FilterState::new().with_brand("NIKE"));
        assert_eq!(session.open_filters(), FilterState::default());
        assert!(session.filters().brands.contains("NIKE"));
    }

    #[test]
    fn test_tab_and_sort() {
        let store = store();
        let mut session = ListingSession::open(&NavigationParams::category("Men"));
        session.select_tab("T-Shirts");
        session.set_sort(SortKey::PriceLow);
        assert_eq!(ids(&session.view(&store)), vec!["3", "1"]);

        session.reset_tab();
        assert_eq!(ids(&session.view(&store)), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_facet_options_from_session() {
        let session = ListingSession::open(&NavigationParams::category("Men"));
        assert_eq!(session.facet_options(&store()).brands, vec!["CLASSIC", "NIKE"]);
    }
}
