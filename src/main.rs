use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::watch;

use shelfview::catalog::{CatalogClient, ListingQuery, RetryPolicy};
use shelfview::config::Config;
use shelfview::listing::page::{listing_data, page_name};
use shelfview::listing::{render_listing, ListingViewState, RenderContext};
use shelfview::logging::{init_tracing, LogTarget};
use shelfview::navigation::{Location, MemoryNavigator, Navigator};
use shelfview::sync::{FilterSynchronizer, Refetch};
use shelfview::ui::{self, App};

/// Browse a storefront product listing in the terminal.
#[derive(Debug, Parser)]
#[command(name = "shelfview", version, about)]
struct Cli {
    /// Config file (defaults to the user config directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override `api.base_url`.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override `api.locale`.
    #[arg(long)]
    locale: Option<String>,

    /// Fetch once and print the rendered listing as JSON.
    #[arg(long)]
    dump: bool,

    /// Listing location, e.g. `/brand/acme?order_by=price`.
    #[arg(default_value = "/products")]
    location: String,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .context("Failed to load configuration")?;

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(locale) = &self.locale {
            config.api.locale = locale.clone();
        }
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    let location = Location::parse(&cli.location)
        .with_context(|| format!("Cannot open '{}'", cli.location))?;

    let target = if cli.dump {
        LogTarget::Stderr
    } else {
        LogTarget::file_for(&config.logging)
    };
    init_tracing(&config.logging, target).context("Failed to initialize logging")?;

    let client = CatalogClient::new(&config.api).context("Failed to build catalog client")?;
    tracing::info!(endpoint = %client.endpoint(), href = %location, "starting");

    let (key_tx, key_rx) = watch::channel(String::new());
    let query = Arc::new(ListingQuery::new(client, key_rx, RetryPolicy::from(&config.api)));
    let navigator: Arc<dyn Navigator> = Arc::new(MemoryNavigator::new(location));
    let sync = FilterSynchronizer::new(
        navigator,
        Arc::clone(&query) as Arc<dyn Refetch>,
        key_tx,
        config.listing.debounce(),
    );

    if cli.dump {
        return dump(&sync, &query, &config).await;
    }

    ui::run(App::new(sync, query, config.listing.clone()))
        .await
        .context("Terminal UI failed")
}

async fn dump(sync: &FilterSynchronizer, query: &ListingQuery, config: &Config) -> Result<()> {
    query.refetch().await.context("Catalog fetch failed")?;

    let location = sync.location();
    let response = query.data();
    let data = listing_data(location, response.as_deref());
    let name = page_name(&location.route);
    let view = render_listing(
        &data,
        &RenderContext {
            page_type: location.route.page_type(),
            page_name: &name,
            loading: false,
            view_state: &ListingViewState::default(),
            location,
            settings: &config.listing,
        },
    );

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
