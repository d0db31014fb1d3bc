//! Reusable storefront server runtime.
//!
//! Provides [`ServerHandle`] that encapsulates the server lifecycle: mock
//! data seeding, access gate wiring, REST API, metrics and graceful shutdown.
//!
//! Both the root binary and the `storefront-cli` member use this to start
//! and stop the service.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{error, info, warn};

use crate::application::{IdentityService, PageService, RouteGuard, RouteNavigator, RouteTable};
use crate::config::AppConfig;
use crate::domain::{AccountRepository, CatalogRepository, OrderRepository, SessionStore};
use crate::infrastructure::storage::{
    InMemoryAccounts, InMemoryCatalog, InMemoryOrderBook, InMemorySessionStore, SeedData,
};
use crate::interfaces::http::middleware::GateState;
use crate::interfaces::http::{create_api_router, AppState, API_PREFIX};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the storefront service.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Seed the catalog and order book with mock data (default: true).
    /// Accounts are always present so the mock login keeps working.
    pub seed: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            seed: true,
        }
    }
}

// ── State assembly ─────────────────────────────────────────────────

/// Wire the in-memory adapters, services and access gate into router state.
pub fn build_app_state(
    config: &AppConfig,
    seed: SeedData,
    prometheus: Option<PrometheusHandle>,
) -> AppState {
    let catalog: Arc<dyn CatalogRepository> = Arc::new(InMemoryCatalog::new(seed.products));
    let orders: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderBook::new(seed.orders));
    let accounts: Arc<dyn AccountRepository> = Arc::new(InMemoryAccounts::new(seed.accounts));
    let sessions: Arc<dyn SessionStore> = Arc::new(
        InMemorySessionStore::new(config.session.hydration_delay())
            .with_expiry(config.session.expiry()),
    );

    let identity = Arc::new(IdentityService::new(accounts.clone(), sessions.clone()));

    let guard = RouteGuard::new(RouteTable::storefront(API_PREFIX), sessions);
    let navigator = RouteNavigator::new(
        config.navigation.login_path.clone(),
        config.navigation.unauthorized_path.clone(),
        std::time::Duration::from_secs(config.navigation.pending_retry_secs),
    );

    let p = &config.pagination;
    AppState {
        pages: PageService::new(p.default_per_page, p.max_per_page, p.max_page_buttons),
        catalog,
        orders,
        accounts,
        identity,
        gate: GateState { guard, navigator },
        started_at: Arc::new(Instant::now()),
        prometheus,
    }
}

/// Install the global Prometheus recorder.
///
/// The recorder can only be installed once per process; later calls reuse
/// the first handle. `None` when another recorder already owns the slot.
pub fn prometheus_handle() -> Option<PrometheusHandle> {
    static PROM_HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

    PROM_HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                info!("📊 Prometheus metrics recorder installed");
                Some(handle)
            }
            Err(e) => {
                warn!("Prometheus recorder unavailable, /metrics disabled: {}", e);
                None
            }
        })
        .clone()
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running storefront service.
///
/// # Examples
///
/// ```rust,no_run
/// use storefront::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the API is listening on (resolved when port 0 was requested).
    pub addr: SocketAddr,

    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the storefront with the given options.
    ///
    /// This will:
    /// 1. Install the Prometheus metrics recorder
    /// 2. Generate the mock accounts, catalog and order book
    /// 3. Build the access gate and the REST API (with Swagger UI)
    /// 4. Bind the listener and serve until shutdown is triggered
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;
        app_cfg.validate()?;

        info!("Starting storefront service...");

        let prometheus = prometheus_handle();

        // ── Mock data ──────────────────────────────────────────
        let seed = if opts.seed {
            SeedData::generate(app_cfg.seed.products, app_cfg.seed.orders)
        } else {
            SeedData::generate(0, 0)
        };
        info!(
            accounts = seed.accounts.len(),
            products = seed.products.len(),
            orders = seed.orders.len(),
            "Mock data ready"
        );

        let state = build_app_state(&app_cfg, seed, prometheus);
        info!(
            protected_routes = state.gate.guard.routes().len(),
            "Access gate configured"
        );
        let api_router = create_api_router(state);

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let listener = tokio::net::TcpListener::bind(app_cfg.address()).await?;
        let addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", addr);
        info!("Swagger UI available at http://{}/docs/", addr);

        let api_server = axum::serve(
            listener,
            api_router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 Storefront started.");

        Ok(Self {
            config: app_cfg,
            addr,
            shutdown,
            api_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop. In-flight requests get the configured
    /// shutdown timeout once the signal has fired.
    pub async fn wait(self) {
        let Self {
            shutdown,
            mut api_task,
            ..
        } = self;
        let signal = shutdown.signal();

        tokio::select! {
            result = &mut api_task => {
                if let Err(e) = result {
                    error!("REST API server task panicked: {}", e);
                }
                info!("REST API server stopped");
            }
            _ = signal.wait() => {
                info!("⏳ Draining in-flight requests...");
                let drained = shutdown
                    .drain(async {
                        if let Err(e) = (&mut api_task).await {
                            error!("REST API server task panicked: {}", e);
                        }
                    })
                    .await;
                if !drained {
                    api_task.abort();
                }
            }
        }

        info!("👋 Storefront shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down storefront...");
        self.trigger_shutdown();
        self.wait().await;
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
/// `RUST_LOG` takes precedence over `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_on_ephemeral_port_and_shuts_down() {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.server.shutdown_timeout = 1;

        let handle = ServerHandle::start(ServerOptions {
            config,
            seed: false,
        })
        .await
        .unwrap();
        assert_ne!(handle.addr.port(), 0);
        assert!(handle.is_running());

        handle.shutdown().await;
    }

    #[tokio::test]
    async fn rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.pagination.max_page_buttons = 1;
        let result = ServerHandle::start(ServerOptions {
            config,
            seed: true,
        })
        .await;
        assert!(result.is_err());
    }
}
