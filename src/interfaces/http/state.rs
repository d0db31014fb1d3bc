//! Shared router state
//!
//! One unified state for all routes; the health and metrics handlers pull
//! their own slice out of it through `FromRef`.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::FromRef;
use metrics_exporter_prometheus::PrometheusHandle;

use super::middleware::GateState;
use super::modules::health::HealthState;
use super::modules::metrics::MetricsState;
use crate::application::{IdentityService, PageService};
use crate::domain::{AccountRepository, CatalogRepository, OrderRepository};

#[derive(Clone)]
pub struct AppState {
    pub pages: PageService,
    pub catalog: Arc<dyn CatalogRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub accounts: Arc<dyn AccountRepository>,
    pub identity: Arc<IdentityService>,
    pub gate: GateState,
    pub started_at: Arc<Instant>,
    pub prometheus: Option<PrometheusHandle>,
}

impl FromRef<AppState> for GateState {
    fn from_ref(s: &AppState) -> Self {
        s.gate.clone()
    }
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            started_at: Arc::clone(&s.started_at),
            catalog: Arc::clone(&s.catalog),
            orders: Arc::clone(&s.orders),
            accounts: Arc::clone(&s.accounts),
            protected_routes: s.gate.guard.routes().len(),
        }
    }
}

impl FromRef<AppState> for MetricsState {
    fn from_ref(s: &AppState) -> Self {
        MetricsState {
            handle: s.prometheus.clone(),
        }
    }
}
