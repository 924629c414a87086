use async_trait::async_trait;

use crate::ports::errors::FetchError;
use crate::referral::ReferralSource;

/// Offset/limit access to the partner-office table of the remote store.
#[async_trait]
pub trait ReferralSourceRepositoryPort: Send + Sync {
    /// Returns up to `limit` sources starting at `offset`, in the store's
    /// stable list order.
    async fn list_sources(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ReferralSource>, FetchError>;

    async fn count_sources(&self) -> Result<usize, FetchError>;
}
