//! In-memory session store

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{
    Account, DomainError, DomainResult, Role, Session, SessionProvider, SessionStore,
};

#[derive(Debug, Clone)]
struct SessionRecord {
    user_id: String,
    display_name: String,
    role: Role,
    opened_at: Instant,
    last_seen: Instant,
}

/// When a session stops being valid. `None` disables a limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionExpiry {
    /// Time allowed between two lookups of the same session
    pub idle_timeout: Option<Duration>,
    /// Lifetime counted from login, regardless of activity
    pub max_age: Option<Duration>,
}

impl SessionExpiry {
    fn is_expired(&self, record: &SessionRecord, now: Instant) -> bool {
        let idle = self
            .idle_timeout
            .is_some_and(|limit| now.duration_since(record.last_seen) >= limit);
        let aged = self
            .max_age
            .is_some_and(|limit| now.duration_since(record.opened_at) >= limit);
        idle || aged
    }
}

/// Sessions keyed by opaque token.
///
/// A session reports `is_loading` until `hydration_delay` has passed since it
/// was opened. Expired sessions read as anonymous and are dropped on lookup;
/// every login also sweeps the expired sessions nobody came back for.
pub struct InMemorySessionStore {
    sessions: DashMap<String, SessionRecord>,
    hydration_delay: Duration,
    expiry: SessionExpiry,
}

impl InMemorySessionStore {
    pub fn new(hydration_delay: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            hydration_delay,
            expiry: SessionExpiry::default(),
        }
    }

    pub fn with_expiry(mut self, expiry: SessionExpiry) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Drop every expired session and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions
            .retain(|_, record| !self.expiry.is_expired(record, now));
        let purged = before.saturating_sub(self.sessions.len());
        if purged > 0 {
            tracing::debug!(purged, "Expired sessions purged");
        }
        purged
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionStore {
    async fn session(&self, token: Option<&str>) -> Session {
        let Some(token) = token else {
            return Session::anonymous();
        };
        let Some(mut record) = self.sessions.get_mut(token) else {
            return Session::anonymous();
        };

        let now = Instant::now();
        if self.expiry.is_expired(&record, now) {
            // release the shard lock before removing
            drop(record);
            self.sessions.remove(token);
            tracing::debug!("Session expired");
            return Session::anonymous();
        }
        record.last_seen = now;

        if now.duration_since(record.opened_at) < self.hydration_delay {
            return Session::loading();
        }

        Session::authenticated(record.role)
            .with_identity(record.user_id.clone(), record.display_name.clone())
    }

    async fn sign_out(&self, token: &str) -> DomainResult<()> {
        self.sessions
            .remove(token)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("session", "token", token))
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn open(&self, account: &Account) -> DomainResult<String> {
        self.purge_expired();

        let token = Uuid::new_v4().simple().to_string();
        let now = Instant::now();
        self.sessions.insert(
            token.clone(),
            SessionRecord {
                user_id: account.id.clone(),
                display_name: account.display_name.clone(),
                role: account.role,
                opened_at: now,
                last_seen: now,
            },
        );
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn franchisee() -> Account {
        Account {
            id: "u-4".into(),
            username: "downtown".into(),
            display_name: "Downtown Franchise".into(),
            email: "downtown@storefront.local".into(),
            role: Role::Franchisee,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn missing_or_unknown_token_is_anonymous() {
        let store = InMemorySessionStore::default();
        assert_eq!(store.session(None).await, Session::anonymous());
        assert_eq!(store.session(Some("nope")).await, Session::anonymous());
    }

    #[tokio::test]
    async fn opened_session_is_authenticated() {
        let store = InMemorySessionStore::default();
        let token = store.open(&franchisee()).await.unwrap();
        let session = store.session(Some(token.as_str())).await;
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(session.role, Some(Role::Franchisee));
        assert_eq!(session.user_id.as_deref(), Some("u-4"));
    }

    #[tokio::test]
    async fn session_is_loading_during_hydration() {
        let store = InMemorySessionStore::new(Duration::from_secs(60));
        let token = store.open(&franchisee()).await.unwrap();
        assert_eq!(store.session(Some(token.as_str())).await, Session::loading());
    }

    #[tokio::test]
    async fn sign_out_removes_the_session() {
        let store = InMemorySessionStore::default();
        let token = store.open(&franchisee()).await.unwrap();
        store.sign_out(&token).await.unwrap();
        assert_eq!(store.active_sessions(), 0);
        assert_eq!(store.session(Some(token.as_str())).await, Session::anonymous());
        assert!(matches!(
            store.sign_out(&token).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn idle_session_expires_and_is_removed() {
        let store = InMemorySessionStore::default().with_expiry(SessionExpiry {
            idle_timeout: Some(Duration::from_millis(20)),
            max_age: None,
        });
        let token = store.open(&franchisee()).await.unwrap();
        assert!(store.session(Some(token.as_str())).await.is_authenticated);

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(store.session(Some(token.as_str())).await, Session::anonymous());
        assert_eq!(store.active_sessions(), 0);
    }

    #[tokio::test]
    async fn activity_does_not_extend_max_age() {
        let store = InMemorySessionStore::default().with_expiry(SessionExpiry {
            idle_timeout: Some(Duration::from_secs(60)),
            max_age: Some(Duration::from_millis(30)),
        });
        let token = store.open(&franchisee()).await.unwrap();
        for _ in 0..4 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            store.session(Some(token.as_str())).await;
        }
        assert_eq!(store.session(Some(token.as_str())).await, Session::anonymous());
    }

    #[tokio::test]
    async fn login_sweeps_abandoned_sessions() {
        let store = InMemorySessionStore::default().with_expiry(SessionExpiry {
            idle_timeout: Some(Duration::from_millis(20)),
            max_age: None,
        });
        for _ in 0..3 {
            store.open(&franchisee()).await.unwrap();
        }
        assert_eq!(store.active_sessions(), 3);

        tokio::time::sleep(Duration::from_millis(40)).await;
        let token = store.open(&franchisee()).await.unwrap();
        assert_eq!(store.active_sessions(), 1);
        assert!(store.session(Some(token.as_str())).await.is_authenticated);
    }

    #[tokio::test]
    async fn no_limits_keep_sessions() {
        let store = InMemorySessionStore::default();
        let token = store.open(&franchisee()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(store.purge_expired(), 0);
        assert!(store.session(Some(token.as_str())).await.is_authenticated);
    }
}
