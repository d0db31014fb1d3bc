//! Route table: which paths are protected and by which requirement

use crate::domain::{Role, RouteRequirement};

#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteRule {
    prefix: String,
    requirement: RouteRequirement,
}

/// Ordered set of protected path prefixes.
///
/// A path matches a prefix on whole segments only, so `/admin` protects
/// `/admin` and `/admin/users` but not `/administrators`. The longest matching
/// prefix wins. Paths without a match are public.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default storefront protection under `api_prefix` (e.g. `/api/v1`).
    pub fn storefront(api_prefix: &str) -> Self {
        let base = api_prefix.trim_end_matches('/');
        Self::new()
            .protect(format!("{base}/account"), RouteRequirement::authenticated())
            .protect(format!("{base}/admin"), RouteRequirement::roles([Role::Admin]))
            .protect(format!("{base}/supplier"), RouteRequirement::roles([Role::Supplier]))
            .protect(
                format!("{base}/franchisee"),
                RouteRequirement::roles([Role::Franchisee]),
            )
    }

    pub fn protect(mut self, prefix: impl Into<String>, requirement: RouteRequirement) -> Self {
        let prefix = normalize(&prefix.into());
        self.rules.retain(|rule| rule.prefix != prefix);
        self.rules.push(RouteRule { prefix, requirement });
        self.rules.sort_by(|a, b| b.prefix.len().cmp(&a.prefix.len()));
        self
    }

    /// Requirement guarding `path`, `None` for public paths. Query strings are
    /// ignored.
    pub fn requirement_for(&self, path: &str) -> Option<&RouteRequirement> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = normalize(path);
        self.rules
            .iter()
            .find(|rule| matches_prefix(&path, &rule.prefix))
            .map(|rule| &rule.requirement)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    if prefix == "/" {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
