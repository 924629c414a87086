use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use rd_core::paging::{PageRequest, PageResult};
use rd_core::ports::{FetchError, PageSourcePort, ReferralSourceRepositoryPort};
use rd_core::referral::ReferralSource;

/// Largest window a single fetch may ask the store for.
pub const DEFAULT_MAX_WINDOW: usize = 1000;

/// Serves loader pages out of the referral-source repository.
pub struct ReferralSourcePageSource {
    repo: Arc<dyn ReferralSourceRepositoryPort>,
    max_window: usize,
}

impl ReferralSourcePageSource {
    pub fn new(repo: Arc<dyn ReferralSourceRepositoryPort>) -> Self {
        Self::with_max_window(repo, DEFAULT_MAX_WINDOW)
    }

    pub fn with_max_window(
        repo: Arc<dyn ReferralSourceRepositoryPort>,
        max_window: usize,
    ) -> Self {
        Self { repo, max_window }
    }
}

#[async_trait]
impl PageSourcePort<ReferralSource> for ReferralSourcePageSource {
    async fn fetch_page(
        &self,
        request: PageRequest,
    ) -> Result<PageResult<ReferralSource>, FetchError> {
        let (limit, offset) = request.as_limit_offset();
        if limit > self.max_window {
            return Err(FetchError::validation(format!(
                "window of {limit} rows exceeds the maximum of {}",
                self.max_window
            )));
        }

        let (items, total) = futures::try_join!(
            self.repo.list_sources(limit, offset),
            self.repo.count_sources()
        )?;
        debug!(limit, offset, received = items.len(), total, "referral sources fetched");

        Ok(PageResult::with_total(items, total))
    }
}
