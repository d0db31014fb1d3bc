//! Account directory interface

use async_trait::async_trait;

use super::model::Account;
use crate::domain::ports::ItemSource;
use crate::domain::DomainResult;

#[async_trait]
pub trait AccountRepository: ItemSource<Account> {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Account>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>>;
}
