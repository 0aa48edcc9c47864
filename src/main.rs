//! Pokedex - A command-line catalog browser
//!
//! Reads commands from stdin until `exit` or end of input.

use std::io;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, CatalogClient, Config, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, so it never mixes with REPL output)
/// 2. Load configuration from environment variables
/// 3. Create the catalog client, which starts the cache reaper
/// 4. Run the REPL on stdin/stdout
/// 5. Log cache statistics and stop the reaper before exiting
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so the prompt stays clean; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, catalog={}, http_timeout={}s",
        config.cache_interval_secs, config.catalog_base_url, config.http_timeout_secs
    );

    let client = CatalogClient::from_config(&config)?;
    let mut session = Session::new(client);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), &mut stdout).await?;

    let cache = session.into_client().into_cache();
    let stats = cache.stats().await;
    info!(
        "Cache stats: hits={}, misses={}, hit_rate={:.2}, inserts={}, reaped={}, entries={}",
        stats.hits,
        stats.misses,
        stats.hit_rate(),
        stats.inserts,
        stats.reaped,
        stats.total_entries
    );
    cache.shutdown().await;
    info!("Pokedex closed");

    Ok(())
}
