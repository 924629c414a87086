use std::future::Future;

use async_trait::async_trait;

use crate::paging::{PageRequest, PageResult};
use crate::ports::errors::FetchError;

/// The page fetch function the incremental loader consumes.
///
/// Implementations typically translate the inclusive window into a range
/// query against a remote store. The loader is agnostic to how.
#[async_trait]
pub trait PageSourcePort<T: Send>: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<T>, FetchError>;
}

/// Adapts a plain async closure into a [`PageSourcePort`].
///
/// ```
/// use rd_core::paging::{PageRequest, PageResult};
/// use rd_core::ports::{FetchError, FnPageSource, PageSourcePort};
///
/// let source = FnPageSource::new(|req: PageRequest| async move {
///     let items: Vec<usize> = (req.start_index()..=req.end_index()).collect();
///     Ok::<_, FetchError>(PageResult::with_total(items, 100))
/// });
/// # let _ = &source as &dyn PageSourcePort<usize>;
/// ```
pub struct FnPageSource<F> {
    fetch: F,
}

impl<F> FnPageSource<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }
}

#[async_trait]
impl<T, F, Fut> PageSourcePort<T> for FnPageSource<F>
where
    T: Send + 'static,
    F: Fn(PageRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<PageResult<T>, FetchError>> + Send,
{
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<T>, FetchError> {
        (self.fetch)(request).await
    }
}
