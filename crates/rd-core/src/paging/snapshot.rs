use serde::Serialize;

use crate::paging::LoaderPhase;
use crate::ports::FetchError;

/// Read-only view of a loader handed to list views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot<T> {
    pub data: Vec<T>,
    pub phase: LoaderPhase,
    /// First page (or a refresh) is in flight.
    pub loading: bool,
    /// A follow-up page is in flight.
    pub loading_more: bool,
    pub has_more: bool,
    pub current_page: usize,
    pub total_count: usize,
    pub error: Option<FetchError>,
}

impl<T> PageSnapshot<T> {
    pub fn is_busy(&self) -> bool {
        self.loading || self.loading_more
    }
}
