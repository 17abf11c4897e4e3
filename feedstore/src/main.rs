use feedstore::{Platform, Store, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Init structured logging (respects RUST_LOG; defaults to info)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Load .env if present
    dotenvy::dotenv().ok();

    let config = StoreConfig::from_env()?;
    tracing::info!(database = %config.redacted_url(), "connecting to database");

    // Connect, create tables and seed sources
    let store = match Store::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize database");
            return Err(e.into());
        }
    };

    let version = store.server_version().await?;
    tracing::info!(%version, "database connection successful");

    for platform in Platform::ALL {
        let count = store.count_sources(Some(platform)).await?;
        tracing::info!(%platform, count, "configured sources");
    }

    Ok(())
}
