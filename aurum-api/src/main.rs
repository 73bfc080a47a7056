use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use aurum_api::{app, worker, AppState};
use aurum_store::{app_config::Config, reference_price, JsonFileCatalog, SimulatedGoldFeed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aurum_api=debug,aurum_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Aurum API on port {}", config.server.port);

    // Reference price: the refresh task owns the only publisher
    let (publisher, reader) = reference_price(config.pricing.fallback_price_per_gram);
    let feed = Arc::new(SimulatedGoldFeed::from_config(&config.pricing));
    worker::spawn_price_refresh(feed, publisher, config.pricing.refresh_interval());

    let catalog = JsonFileCatalog::new(&config.catalog.path);
    tracing::info!("Serving catalog from {}", catalog.path().display());

    let state = AppState::new(Arc::new(catalog), reader)
        .with_frontend_url(config.server.frontend_url.clone());
    let app = app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("  GET /api/products - Get all products");
    tracing::info!("  GET /api/gold-price - Get current gold price");
    tracing::info!("  Filter params: minPrice, maxPrice, minPopularity, maxPopularity");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
