//! Storefront service
//!
//! Multi-role storefront REST API over mock in-memory data.
//! Reads configuration from a TOML file (~/.config/storefront/config.toml,
//! or the path in `STOREFRONT_CONFIG`).

use tracing::{error, info};

use storefront::config::{config_path_from_env, AppConfig};
use storefront::server::{init_tracing, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = config_path_from_env();
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    let handle = ServerHandle::start(ServerOptions {
        config,
        seed: true,
    })
    .await?;

    handle.install_signal_handler();
    info!("🚀 Press Ctrl+C to shutdown gracefully.");
    handle.wait().await;

    Ok(())
}
