//! Loads the catalog document and writes the learning hub as a static page.
//!
//! The data location comes from `LEARNING_HUB_DATA` or `--data`; the page is
//! printed to stdout unless `--out` is given. A load failure still writes a
//! page (holding only the fallback message) and exits non-zero.

use anyhow::{Context, Result};
use learning_hub::config::{Command, USAGE};
use learning_hub::{CatalogLoader, HubConfig, LearningHub, html};
use std::{env, fs};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = match HubConfig::from_env().with_args(env::args_os().skip(1))? {
        Command::Run(config) => config,
        Command::Help => {
            eprintln!("{USAGE}");
            return Ok(());
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let loader = CatalogLoader::new(config.data.clone().into_source());
    let mut hub = LearningHub::new();
    let loaded = hub.initialize(&loader).await;

    if config.list_filters {
        loaded.with_context(|| format!("loading catalog from {}", config.data))?;
        for button in &hub.surface().filter_bar {
            println!("{}", button.label());
        }
        return Ok(());
    }

    let offered = hub
        .surface()
        .filter_bar
        .iter()
        .any(|button| button.selection == config.initial_filter);
    if loaded.is_ok() && !offered {
        warn!(filter = %config.initial_filter, "no resource matches the requested filter");
    }
    hub.select_filter(config.initial_filter);
    let page = html::render_page(hub.surface(), &config.title);
    match &config.output {
        Some(path) => {
            fs::write(path, &page).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote page");
        }
        None => print!("{page}"),
    }

    loaded.with_context(|| format!("loading catalog from {}", config.data))
}
