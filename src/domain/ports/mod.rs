//! Domain ports
//!
//! Trait contracts for the collaborators the pagination and access cores
//! consume. Adapters in `infrastructure` implement them.

use std::ops::Range;

use async_trait::async_trait;

use super::access::Session;
use super::account::Account;
use super::DomainResult;

/// A collection that can be counted and sliced by position.
///
/// Pagination only ever asks for the count and for the half-open range of
/// the current page; the source decides how items are stored.
#[async_trait]
pub trait ItemSource<T>: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    /// Items at positions `range`. Ranges past the end are truncated.
    async fn slice(&self, range: Range<usize>) -> DomainResult<Vec<T>>;
}

#[async_trait]
impl<T: Clone + Send + Sync> ItemSource<T> for Vec<T> {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.len() as u64)
    }

    async fn slice(&self, range: Range<usize>) -> DomainResult<Vec<T>> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        Ok(self[start..end].to_vec())
    }
}

/// Supplies the session behind a request token.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Current session for `token`; anonymous when the token is absent or unknown.
    async fn session(&self, token: Option<&str>) -> Session;

    /// End the session identified by `token`.
    async fn sign_out(&self, token: &str) -> DomainResult<()>;
}

/// Session provider that can also open sessions for the mock login.
#[async_trait]
pub trait SessionStore: SessionProvider {
    /// Open a session for `account` and return its token.
    async fn open(&self, account: &Account) -> DomainResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn vec_source_truncates_ranges() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(items.count().await.unwrap(), 5);
        assert_eq!(items.slice(3..10).await.unwrap(), vec![4, 5]);
        assert!(items.slice(7..9).await.unwrap().is_empty());
    }
}
