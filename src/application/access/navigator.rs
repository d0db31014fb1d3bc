//! Turns access decisions into navigation outcomes

use std::time::Duration;

use url::{form_urlencoded, Url};

use crate::domain::Decision;

/// Query parameter carrying the location to return to after login.
pub const REDIRECT_PARAM: &str = "redirect";

/// What the caller should do with a request after the gate has decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Mount the protected content
    Render,
    /// Show a loading placeholder and ask again later
    Wait { retry_after: Duration },
    /// Send the user elsewhere
    Redirect { location: String },
}

/// Maps [`Decision`]s to concrete storefront locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNavigator {
    login_path: String,
    unauthorized_path: String,
    retry_after: Duration,
}

impl RouteNavigator {
    pub fn new(
        login_path: impl Into<String>,
        unauthorized_path: impl Into<String>,
        retry_after: Duration,
    ) -> Self {
        Self {
            login_path: login_path.into(),
            unauthorized_path: unauthorized_path.into(),
            retry_after,
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn unauthorized_path(&self) -> &str {
        &self.unauthorized_path
    }

    pub fn navigate(&self, decision: &Decision) -> Navigation {
        match decision {
            Decision::Allow => Navigation::Render,
            Decision::Pending => Navigation::Wait {
                retry_after: self.retry_after,
            },
            Decision::RedirectLogin { from } => Navigation::Redirect {
                location: self.login_location(from),
            },
            Decision::RedirectUnauthorized => Navigation::Redirect {
                location: self.unauthorized_path.clone(),
            },
        }
    }

    /// Login location that remembers `from`, e.g. `/login?redirect=%2Fadmin`.
    pub fn login_location(&self, from: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(from.as_bytes()).collect();
        format!("{}?{}={}", self.login_path, REDIRECT_PARAM, encoded)
    }
}

impl Default for RouteNavigator {
    fn default() -> Self {
        Self::new("/login", "/unauthorized", Duration::from_secs(1))
    }
}

const LOCAL_ORIGIN: &str = "http://storefront.local/";

/// Only local absolute paths are accepted as post-login targets; anything
/// else falls back to `/`.
pub fn safe_return_path(redirect: Option<&str>) -> String {
    redirect
        .and_then(local_path)
        .unwrap_or_else(|| "/".to_string())
}

/// Resolves `target` against a fixed origin and keeps it only when the
/// origin is unchanged. Browsers read `/\host` as `//host`, so a backslash
/// in second position is refused before resolving.
fn local_path(target: &str) -> Option<String> {
    let mut chars = target.chars();
    if chars.next() != Some('/') || matches!(chars.next(), Some('/' | '\\')) {
        return None;
    }
    if target.chars().any(char::is_control) {
        return None;
    }

    let base = Url::parse(LOCAL_ORIGIN).ok()?;
    let resolved = base.join(target).ok()?;
    if resolved.origin() != base.origin() {
        return None;
    }

    let mut path = resolved.path().to_string();
    if let Some(query) = resolved.query() {
        path.push('?');
        path.push_str(query);
    }
    if let Some(fragment) = resolved.fragment() {
        path.push('#');
        path.push_str(fragment);
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_renders() {
        assert_eq!(RouteNavigator::default().navigate(&Decision::Allow), Navigation::Render);
    }

    #[test]
    fn pending_waits() {
        let navigator = RouteNavigator::new("/login", "/unauthorized", Duration::from_secs(3));
        assert_eq!(
            navigator.navigate(&Decision::Pending),
            Navigation::Wait {
                retry_after: Duration::from_secs(3)
            }
        );
    }

    #[test]
    fn login_redirect_preserves_location() {
        let decision = Decision::RedirectLogin {
            from: "/api/v1/admin/users?page=2".into(),
        };
        assert_eq!(
            RouteNavigator::default().navigate(&decision),
            Navigation::Redirect {
                location: "/login?redirect=%2Fapi%2Fv1%2Fadmin%2Fusers%3Fpage%3D2".into()
            }
        );
    }

    #[test]
    fn unauthorized_redirect() {
        assert_eq!(
            RouteNavigator::default().navigate(&Decision::RedirectUnauthorized),
            Navigation::Redirect {
                location: "/unauthorized".into()
            }
        );
    }

    #[test]
    fn return_path_must_be_local() {
        assert_eq!(safe_return_path(Some("/franchisee/orders")), "/franchisee/orders");
        assert_eq!(safe_return_path(Some("https://evil.example")), "/");
        assert_eq!(safe_return_path(Some("//evil.example")), "/");
        assert_eq!(safe_return_path(Some("/\\evil.example")), "/");
        assert_eq!(safe_return_path(Some("/\\/evil.example")), "/");
        assert_eq!(safe_return_path(Some("/\t/evil.example")), "/");
        assert_eq!(safe_return_path(Some("franchisee/orders")), "/");
        assert_eq!(safe_return_path(None), "/");
    }

    #[test]
    fn return_path_keeps_query_and_fragment() {
        assert_eq!(
            safe_return_path(Some("/products?page=3#grid")),
            "/products?page=3#grid"
        );
        assert_eq!(safe_return_path(Some("/admin/../account")), "/account");
    }
}
