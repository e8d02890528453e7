//! Category Selection Model

use serde::{Deserialize, Serialize};

/// Sentinel tab label meaning "the whole selected category"
pub const ALL_TAB: &str = "All";

/// Parameters a listing screen is opened with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationParams {
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub sub_category_name: Option<String>,
}

impl NavigationParams {
    pub fn category(name: impl Into<String>) -> Self {
        Self {
            category_name: Some(name.into()),
            sub_category_name: None,
        }
    }

    pub fn sub_category(category: impl Into<String>, sub_category: impl Into<String>) -> Self {
        Self {
            category_name: Some(category.into()),
            sub_category_name: Some(sub_category.into()),
        }
    }
}

/// The category currently viewed plus the active horizontal tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSelection {
    /// Label to resolve in the category tree; `None` when nothing was selected
    pub target_label: Option<String>,
    /// Active tab label, [`ALL_TAB`] by default
    pub tab: String,
}

impl Default for ActiveSelection {
    fn default() -> Self {
        Self {
            target_label: None,
            tab: ALL_TAB.to_string(),
        }
    }
}

impl ActiveSelection {
    /// Derive the selection from navigation parameters
    ///
    /// The sub-category wins over the category when both are given.
    pub fn from_params(params: &NavigationParams) -> Self {
        let target_label = params
            .sub_category_name
            .clone()
            .or_else(|| params.category_name.clone());
        Self {
            target_label,
            tab: ALL_TAB.to_string(),
        }
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = tab.into();
        self
    }

    pub fn is_all_tab(&self) -> bool {
        self.tab == ALL_TAB
    }

    /// Label that scopes the listing: the tab when one is picked, else the target
    pub fn effective_label(&self) -> Option<&str> {
        if self.is_all_tab() {
            self.target_label.as_deref()
        } else {
            Some(self.tab.as_str())
        }
    }
}
