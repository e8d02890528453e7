use anyhow::Context;
use catalog_engine::{CatalogStore, Cli, ListingSession, setup_environment};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Environment (dotenv, config, logging)
    let config = setup_environment()?;
    tracing::debug!(environment = %config.environment, "Catalog engine starting");

    // 2. Static catalog
    let store = CatalogStore::load(&config).context("failed to load catalog")?;

    // 3. Listing state as the screen would hold it
    let mut session = ListingSession::open(&cli.navigation_params());
    session.select_tab(cli.tab.as_str());
    session.apply_filters(cli.filter_state());

    // 4. Recompute and print
    let output = if cli.facets {
        serde_json::to_value(session.facet_options(&store))?
    } else {
        let view = session.view(&store);
        if view.is_empty() {
            tracing::info!("No products match the selection");
        }
        serde_json::to_value(view)?
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
