//! Session snapshot as seen by the access gate

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Role;

/// Read-only view of the caller's session.
///
/// Produced by a [`SessionProvider`](crate::domain::ports::SessionProvider);
/// the gate only reads `is_loading`, `is_authenticated` and `role`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    pub is_authenticated: bool,
    pub role: Option<Role>,
    pub is_loading: bool,
    /// Identity of the signed-in account, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Session {
    /// No session at all.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session whose state is still being resolved.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn authenticated(role: Role) -> Self {
        Self {
            is_authenticated: true,
            role: Some(role),
            ..Self::default()
        }
    }

    pub fn with_identity(mut self, user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self.display_name = Some(display_name.into());
        self
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}
