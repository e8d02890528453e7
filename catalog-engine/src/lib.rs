//! Storefront catalog engine
//!
//! Category-scoped product filtering for a fashion storefront listing:
//!
//! - **Filtering** (`filtering`): tree resolution, category matching, facet
//!   filters, sorting and facet enumeration as pure functions
//! - **Services** (`services`): the static catalog store and per-screen
//!   listing session
//! - **Core** (`core`): configuration and errors
//!
//! ```text
//! catalog-engine/src/
//! ├── core/          # config, errors
//! ├── filtering/     # resolver, matcher, facets, sorter, enumerator, engine
//! ├── services/      # catalog store, listing session
//! ├── utils/         # logging
//! └── cli.rs         # query runner arguments
//! ```

pub mod cli;
pub mod core;
pub mod filtering;
pub mod services;
pub mod utils;

pub use cli::Cli;
pub use crate::core::{Config, EngineError, Result};
pub use filtering::{FacetOptions, ListingEngine, ListingView};
pub use services::{CatalogStore, ListingSession};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;

    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.log_json,
        config.log_dir.as_deref(),
    );
    Ok(config)
}
