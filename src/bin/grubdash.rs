//! GrubDash server
//!
//! Usage: `grubdash [config.yaml]`. Without an argument the path is read
//! from `GRUBDASH_CONFIG`; without either, built-in defaults are used with
//! empty stores. `GRUBDASH_PORT` overrides the configured port and
//! `RUST_LOG` controls log output.

use anyhow::Result;
use grubdash::prelude::*;
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
        .or_else(|| std::env::var("GRUBDASH_CONFIG").ok())
    {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            AppConfig::from_yaml_file(&path)?
        }
        None => AppConfig::default(),
    }
    .with_env_overrides();

    let store = EntityStore::seeded(&config.seed)?;

    ServerBuilder::new()
        .register(DishDescriptor::new(store.dishes.clone()))
        .register(OrderDescriptor::new(store.orders.clone()))
        .serve(&config.server.addr())
        .await
}
