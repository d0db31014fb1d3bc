//! Route guard: resolves the session and runs the access gate

use std::sync::Arc;

use tracing::{debug, info};

use super::routes::RouteTable;
use crate::domain::{authorize, Decision, SessionProvider};

/// Decides every request against the route table.
///
/// Public paths are allowed without consulting the session provider.
#[derive(Clone)]
pub struct RouteGuard {
    routes: Arc<RouteTable>,
    sessions: Arc<dyn SessionProvider>,
}

impl RouteGuard {
    pub fn new(routes: RouteTable, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            routes: Arc::new(routes),
            sessions,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Decision for a request to `location` (path plus optional query)
    /// carrying the session `token`.
    pub async fn check(&self, location: &str, token: Option<&str>) -> Decision {
        let Some(requirement) = self.routes.requirement_for(location) else {
            return Decision::Allow;
        };

        let session = self.sessions.session(token).await;
        let decision = authorize(&session, requirement, location);

        metrics::counter!("access_decisions_total", "decision" => decision.label()).increment(1);

        match &decision {
            Decision::Allow => debug!(location, role = ?session.role, "Access allowed"),
            Decision::Pending => debug!(location, "Session still loading"),
            Decision::RedirectLogin { .. } => {
                info!(location, "Unauthenticated access, redirecting to login")
            }
            Decision::RedirectUnauthorized => {
                info!(location, role = ?session.role, "Role not permitted, redirecting")
            }
        }

        decision
    }
}
