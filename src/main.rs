//! BookEasy listing server
//!
//! Usage: `bookeasy [config.yaml]`. Without an argument the `BOOKEASY_CONFIG`
//! environment variable is tried, then the built-in defaults.

use anyhow::Result;
use bookeasy::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("BOOKEASY_CONFIG").ok())
    {
        Some(path) => {
            tracing::info!(%path, "loading configuration");
            FrontendConfig::from_yaml_file(&path)?
        }
        None => FrontendConfig::default(),
    };

    ServerBuilder::new().with_config(config).serve().await
}
