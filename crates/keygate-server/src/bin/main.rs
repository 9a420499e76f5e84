//! keygate - login and item HTTP service
//!
//! Settings come from an optional JSON file (`--config`), overridden by
//! command-line flags or their environment variables.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use keygate_core::{Keygate, Settings, StoreBackend};
use keygate_server::ApiServer;

/// keygate - login and item HTTP service backed by a key-value store
#[derive(Parser, Debug)]
#[command(name = "keygate")]
#[command(version)]
#[command(about = "Login and item HTTP service backed by a key-value store")]
struct Args {
    /// Path to a JSON settings file
    #[arg(long, env = "KEYGATE_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind to (default: 0.0.0.0)
    #[arg(long, env = "KEYGATE_HOST")]
    host: Option<String>,

    /// Port to listen on (default: 8000)
    #[arg(long, env = "KEYGATE_PORT")]
    port: Option<u16>,

    /// Store backend: redis or memory (default: redis)
    #[arg(long, env = "KEYGATE_STORE")]
    store: Option<StoreBackend>,

    /// Redis connection URL
    #[arg(long, env = "KEYGATE_REDIS_URL", hide_env_values = true)]
    redis_url: Option<String>,
}

impl Args {
    fn into_settings(self) -> keygate_core::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(host) = self.host {
            settings.host = host;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(store) = self.store {
            settings.store = store;
        }
        if let Some(redis_url) = self.redis_url {
            settings.redis_url = redis_url;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let settings = Args::parse()
        .into_settings()
        .map_err(|e| format!("Failed to load settings: {}", e))?;

    let keygate = Keygate::connect(&settings)
        .await
        .map_err(|e| format!("Failed to open store: {}", e))?;

    info!("Starting keygate on http://{}", settings.bind_addr());
    ApiServer::new(keygate, settings.bind_addr()).run().await?;

    Ok(())
}
