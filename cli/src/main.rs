//! Storefront CLI Server
//!
//! Headless storefront service (catalog, franchisee dashboard, supplier
//! catalog, admin panel) over mock in-memory data.
//!
//! ```sh
//! # Run with default config (~/.config/storefront/config.toml)
//! storefront
//!
//! # Custom config path
//! storefront --config /etc/storefront/config.toml
//!
//! # Override the port
//! storefront --port 9090
//!
//! # Validate config without starting
//! storefront --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use storefront::config::{default_config_path, AppConfig, CONFIG_ENV};
use storefront::server::{init_tracing, ServerHandle, ServerOptions};

/// Storefront service with a paginated catalog and role-gated dashboards.
#[derive(Parser, Debug)]
#[command(
    name = "storefront",
    version,
    about = "Multi-role storefront over mock data",
    long_about = "Storefront REST API: public catalog browsing plus franchisee, \
                  supplier and admin areas behind a role-based access gate.\n\n\
                  Default config: ~/.config/storefront/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Start with an empty catalog and order book.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let loaded = AppConfig::load(&config_path);

    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Err(e) = loaded.and_then(|_| config.validate()) {
            eprintln!("❌ Invalid configuration in {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.address());
        println!(
            "   Pagination  : {} per page (max {}), {} buttons",
            config.pagination.default_per_page,
            config.pagination.max_per_page,
            config.pagination.max_page_buttons
        );
        println!("   Login path  : {}", config.navigation.login_path);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
    }
    if let Some(level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        seed: !cli.no_seed,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;

    Ok(())
}
