//! Route authorization decision

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Role, Session};

/// Roles a route admits. `None` admits any authenticated session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequirement {
    pub allowed_roles: Option<BTreeSet<Role>>,
}

impl RouteRequirement {
    /// Any authenticated session, regardless of role.
    pub fn authenticated() -> Self {
        Self { allowed_roles: None }
    }

    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: Some(roles.into_iter().collect()),
        }
    }

    pub fn admits(&self, role: Role) -> bool {
        self.allowed_roles
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&role))
    }
}

/// Outcome of authorizing a session against a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// Render the protected content
    Allow,
    /// Session still loading; re-evaluate once it settles
    Pending,
    /// Not signed in; `from` is the location to return to after login
    RedirectLogin { from: String },
    /// Signed in with a role the route does not admit
    RedirectUnauthorized,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::Pending => "pending",
            Decision::RedirectLogin { .. } => "redirect_login",
            Decision::RedirectUnauthorized => "redirect_unauthorized",
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether `session` may enter the route at `location`.
///
/// Rules are checked in order and the first match wins: loading sessions are
/// pending, unauthenticated sessions go to login carrying `location`, a known
/// role outside `allowed_roles` is unauthorized, anything else is allowed.
pub fn authorize(session: &Session, requirement: &RouteRequirement, location: &str) -> Decision {
    if session.is_loading {
        return Decision::Pending;
    }

    if !session.is_authenticated {
        return Decision::RedirectLogin {
            from: location.to_string(),
        };
    }

    match (&requirement.allowed_roles, session.role) {
        (Some(allowed), Some(role)) if !allowed.contains(&role) => Decision::RedirectUnauthorized,
        _ => Decision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_only() -> RouteRequirement {
        RouteRequirement::roles([Role::Admin])
    }

    #[test]
    fn loading_session_is_pending() {
        assert_eq!(authorize(&Session::loading(), &admin_only(), "/admin"), Decision::Pending);
        assert_eq!(
            authorize(&Session::loading(), &RouteRequirement::authenticated(), "/account"),
            Decision::Pending
        );
    }

    #[test]
    fn loading_wins_over_authentication() {
        let session = Session {
            is_loading: true,
            ..Session::authenticated(Role::Admin)
        };
        assert_eq!(authorize(&session, &admin_only(), "/admin"), Decision::Pending);
    }

    #[test]
    fn anonymous_session_redirects_to_login_with_location() {
        let decision = authorize(&Session::anonymous(), &admin_only(), "/admin/users?page=3");
        assert_eq!(
            decision,
            Decision::RedirectLogin {
                from: "/admin/users?page=3".to_string()
            }
        );
    }

    #[test]
    fn role_outside_requirement_is_unauthorized() {
        let decision = authorize(&Session::authenticated(Role::Supplier), &admin_only(), "/admin");
        assert_eq!(decision, Decision::RedirectUnauthorized);
    }

    #[test]
    fn matching_role_is_allowed() {
        let requirement = RouteRequirement::roles([Role::Franchisee]);
        let decision = authorize(&Session::authenticated(Role::Franchisee), &requirement, "/franchisee");
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn unrestricted_route_admits_any_role() {
        for role in Role::ALL {
            let decision = authorize(
                &Session::authenticated(role),
                &RouteRequirement::authenticated(),
                "/account",
            );
            assert_eq!(decision, Decision::Allow);
        }
    }

    #[test]
    fn authenticated_session_without_role_is_allowed() {
        let session = Session {
            is_authenticated: true,
            ..Session::default()
        };
        assert_eq!(authorize(&session, &admin_only(), "/admin"), Decision::Allow);
    }

    #[test]
    fn multi_role_requirement() {
        let requirement = RouteRequirement::roles([Role::Admin, Role::Supplier]);
        assert!(requirement.admits(Role::Supplier));
        assert!(!requirement.admits(Role::Franchisee));
        assert_eq!(
            authorize(&Session::authenticated(Role::Franchisee), &requirement, "/catalog/manage"),
            Decision::RedirectUnauthorized
        );
    }

    #[test]
    fn decision_labels() {
        assert_eq!(Decision::Pending.label(), "pending");
        assert_eq!(
            Decision::RedirectLogin { from: "/".into() }.label(),
            "redirect_login"
        );
    }
}
