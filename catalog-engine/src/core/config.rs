use std::path::PathBuf;

use super::error::{EngineError, Result};

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | CATALOG_PATH | (builtin) | Product catalog JSON file |
/// | CATEGORY_TREE_PATH | (builtin) | Category tree JSON file |
/// | LOG_LEVEL | info | Log level |
/// | LOG_JSON | false | Emit JSON log lines |
/// | LOG_DIR | (stderr) | Directory for daily rolling log files |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// CATALOG_PATH=./products.json LOG_LEVEL=debug catalog-engine --category Men
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Product catalog file; the builtin mock catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Category tree file; the builtin tree is used when unset
    pub category_tree_path: Option<PathBuf>,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            catalog_path: std::env::var("CATALOG_PATH").ok().map(PathBuf::from),
            category_tree_path: std::env::var("CATEGORY_TREE_PATH").ok().map(PathBuf::from),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the data file locations
    ///
    /// Mostly used by tests
    pub fn with_overrides(
        catalog_path: Option<impl Into<PathBuf>>,
        category_tree_path: Option<impl Into<PathBuf>>,
    ) -> Self {
        let mut config = Self::from_env();
        config.catalog_path = catalog_path.map(Into::into);
        config.category_tree_path = category_tree_path.map(Into::into);
        config
    }

    /// Check that configured files exist and the log level parses
    pub fn validate(&self) -> Result<()> {
        for path in [&self.catalog_path, &self.category_tree_path].into_iter().flatten() {
            if !path.is_file() {
                return Err(EngineError::Config(format!("{} is not a file", path.display())));
            }
        }
        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(EngineError::Config(format!("unknown log level: {}", self.log_level)));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
