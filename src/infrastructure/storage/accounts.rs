//! In-memory account directory

use std::ops::Range;

use async_trait::async_trait;

use crate::domain::{Account, AccountRepository, DomainResult, ItemSource};

pub struct InMemoryAccounts {
    accounts: Vec<Account>,
}

impl InMemoryAccounts {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl ItemSource<Account> for InMemoryAccounts {
    async fn count(&self) -> DomainResult<u64> {
        self.accounts.count().await
    }

    async fn slice(&self, range: Range<usize>) -> DomainResult<Vec<Account>> {
        self.accounts.slice(range).await
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Account>> {
        Ok(self.accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>> {
        Ok(self
            .accounts
            .iter()
            .find(|a| a.username.eq_ignore_ascii_case(username))
            .cloned())
    }
}
