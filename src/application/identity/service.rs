//! Identity service — mock login and sign-out
//!
//! There are no credentials: signing in only needs the username of an
//! active account from the account directory.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Account, AccountRepository, DomainError, DomainResult, Session, SessionStore};

/// Result of a successful mock login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub account: Account,
}

pub struct IdentityService {
    accounts: Arc<dyn AccountRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl IdentityService {
    pub fn new(accounts: Arc<dyn AccountRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { accounts, sessions }
    }

    /// Open a session for the account named `username`.
    pub async fn login(&self, username: &str) -> DomainResult<LoginResult> {
        let account = self
            .accounts
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Unknown account".into()))?;

        if !account.is_active {
            return Err(DomainError::Unauthorized("Account is disabled".into()));
        }

        let token = self.sessions.open(&account).await?;
        info!(username = %account.username, role = %account.role, "Session opened");

        Ok(LoginResult { token, account })
    }

    /// Sign out the session behind `token`.
    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        self.sessions.sign_out(token).await?;
        info!("Session closed");
        Ok(())
    }

    pub async fn current(&self, token: Option<&str>) -> Session {
        self.sessions.session(token).await
    }

    /// Account behind the session, if the session is signed in.
    pub async fn current_account(&self, token: Option<&str>) -> DomainResult<Option<Account>> {
        let session = self.current(token).await;
        match session.user_id {
            Some(id) if session.is_authenticated => self.accounts.find_by_id(&id).await,
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::infrastructure::{InMemoryAccounts, InMemorySessionStore, SeedData};

    fn service() -> IdentityService {
        let seed = SeedData::generate(0, 0);
        IdentityService::new(
            Arc::new(InMemoryAccounts::new(seed.accounts)),
            Arc::new(InMemorySessionStore::default()),
        )
    }

    #[tokio::test]
    async fn login_opens_a_session_for_the_account_role() {
        let service = service();
        let result = service.login("Downtown").await.unwrap();
        assert_eq!(result.account.role, Role::Franchisee);

        let session = service.current(Some(result.token.as_str())).await;
        assert!(session.has_role(Role::Franchisee));

        let account = service.current_account(Some(result.token.as_str())).await.unwrap();
        assert_eq!(account.map(|a| a.username), Some("downtown".to_string()));
    }

    #[tokio::test]
    async fn unknown_and_disabled_accounts_are_rejected() {
        let service = service();
        assert!(matches!(
            service.login("nobody").await,
            Err(DomainError::Unauthorized(_))
        ));
        assert!(matches!(
            service.login("closed-store").await,
            Err(DomainError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn logout_ends_the_session() {
        let service = service();
        let result = service.login("admin").await.unwrap();
        service.logout(&result.token).await.unwrap();
        assert!(!service.current(Some(result.token.as_str())).await.is_authenticated);
        assert!(service.current_account(Some(result.token.as_str())).await.unwrap().is_none());
    }
}
