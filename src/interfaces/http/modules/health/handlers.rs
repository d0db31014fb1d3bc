//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    Account, AccountRepository, CatalogRepository, ItemSource, Order, OrderRepository, Product,
};

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub started_at: Arc<Instant>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub accounts: Arc<dyn AccountRepository>,
    pub protected_routes: usize,
}

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: StoreComponents,
    /// Route prefixes guarded by the access gate
    pub protected_routes: usize,
}

/// Health of each mock data store
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreComponents {
    pub catalog: ComponentHealth,
    pub orders: ComponentHealth,
    pub accounts: ComponentHealth,
}

impl StoreComponents {
    fn all_ok(&self) -> bool {
        [&self.catalog, &self.orders, &self.accounts]
            .iter()
            .all(|c| c.status == "ok")
    }
}

/// Component health status
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    /// Items the store currently holds
    pub items: Option<u64>,
}

impl ComponentHealth {
    async fn probe<T, S: ItemSource<T> + ?Sized>(store: &S) -> Self {
        match store.count().await {
            Ok(items) => Self {
                status: "ok".to_string(),
                items: Some(items),
            },
            Err(e) => {
                tracing::warn!("Health probe failed: {}", e);
                Self {
                    status: "error".to_string(),
                    items: None,
                }
            }
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "A data store is failing", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let components = StoreComponents {
        catalog: ComponentHealth::probe::<Product, _>(state.catalog.as_ref()).await,
        orders: ComponentHealth::probe::<Order, _>(state.orders.as_ref()).await,
        accounts: ComponentHealth::probe::<Account, _>(state.accounts.as_ref()).await,
    };

    let (http_status, status) = if components.all_ok() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        http_status,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: state.started_at.elapsed().as_secs(),
            components,
            protected_routes: state.protected_routes,
        }),
    )
}
