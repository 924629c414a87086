//! Loader state machine.
//!
//! Pure transition functions over [`LoaderState`]. A fetch is modelled as a
//! begin/complete pair: `begin_*` moves the state into a loading phase and
//! hands out a [`FetchTicket`]; the caller performs the fetch and returns the
//! ticket together with the result to [`LoaderState::complete`]. Tickets
//! carry the generation they were issued under, so a completion that was
//! superseded by `refresh`/`reset` is recognised and dropped.

use crate::paging::{LoaderConfig, LoaderPhase, PageRequest, PageResult, PageSnapshot};
use crate::ports::FetchError;

/// Why a fetch was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// First page after construction, reset, or a failed first attempt.
    Initial,
    /// Next page appended to what is already accumulated.
    More,
    /// First page re-fetched to replace what is accumulated.
    Refresh,
}

impl FetchKind {
    fn replaces(self) -> bool {
        matches!(self, FetchKind::Initial | FetchKind::Refresh)
    }
}

/// Handle for a started fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    page_index: usize,
    request: PageRequest,
    kind: FetchKind,
}

impl FetchTicket {
    pub fn request(&self) -> PageRequest {
        self.request
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn kind(&self) -> FetchKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Why `begin_load_more` declined to start a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    InFlight,
    Exhausted,
}

/// What `complete` did with a fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied { received: usize },
    Failed,
    /// The ticket predates the latest refresh/reset; state untouched.
    Stale,
}

/// The loader's single persistent entity.
#[derive(Debug, Clone)]
pub struct LoaderState<T> {
    config: LoaderConfig,
    accumulated: Vec<T>,
    phase: LoaderPhase,
    current_page_index: usize,
    total_count: usize,
    last_error: Option<FetchError>,
    pages_loaded: usize,
    generation: u64,
}

impl<T> LoaderState<T> {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            accumulated: Vec::new(),
            phase: LoaderPhase::Idle,
            current_page_index: config.initial_page_index(),
            total_count: 0,
            last_error: None,
            pages_loaded: 0,
            generation: 0,
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn accumulated(&self) -> &[T] {
        &self.accumulated
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts the next fetch, or the first one if nothing is loaded yet.
    ///
    /// Declines while a fetch is in flight or once the source is exhausted;
    /// declining leaves the state untouched.
    pub fn begin_load_more(&mut self) -> Result<FetchTicket, SkipReason> {
        if self.phase.is_loading() {
            return Err(SkipReason::InFlight);
        }
        if self.phase.is_exhausted() {
            return Err(SkipReason::Exhausted);
        }

        let (kind, page_index) = if self.pages_loaded == 0 {
            (FetchKind::Initial, self.config.initial_page_index())
        } else {
            (FetchKind::More, self.current_page_index.saturating_add(1))
        };

        self.phase = match kind {
            FetchKind::More => LoaderPhase::LoadingMore,
            _ => LoaderPhase::InitialLoading,
        };
        self.last_error = None;

        Ok(self.ticket(kind, page_index))
    }

    /// Starts a re-fetch of the first page. Always permitted; supersedes
    /// any fetch already in flight.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.phase = LoaderPhase::InitialLoading;
        self.last_error = None;
        self.ticket(FetchKind::Refresh, self.config.initial_page_index())
    }

    /// Applies a settled fetch.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageResult<T>, FetchError>,
    ) -> ApplyOutcome {
        if ticket.generation != self.generation {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                ticket_generation = ticket.generation,
                current_generation = self.generation,
                page_index = ticket.page_index,
                "discarding stale page result"
            );
            return ApplyOutcome::Stale;
        }

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                self.phase = LoaderPhase::Failed;
                self.last_error = Some(err);
                return ApplyOutcome::Failed;
            }
        };

        let received = page.items.len();
        if ticket.kind.replaces() {
            self.accumulated = page.items;
            self.pages_loaded = 1;
            self.total_count = page.total_count.unwrap_or(self.accumulated.len());
        } else {
            self.accumulated.extend(page.items);
            self.pages_loaded += 1;
            self.total_count = page
                .total_count
                .unwrap_or_else(|| self.total_count.max(self.accumulated.len()));
        }
        self.current_page_index = ticket.page_index;
        self.last_error = None;

        let short_page = received < self.config.page_size();
        let reached_total = page
            .total_count
            .is_some_and(|total| self.accumulated.len() >= total);
        self.phase = if short_page || reached_total {
            LoaderPhase::Exhausted
        } else {
            LoaderPhase::Ready
        };

        ApplyOutcome::Applied { received }
    }

    /// Back to a freshly constructed loader, without fetching.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.accumulated.clear();
        self.phase = LoaderPhase::Idle;
        self.current_page_index = self.config.initial_page_index();
        self.total_count = 0;
        self.last_error = None;
        self.pages_loaded = 0;
    }

    /// Orphans every outstanding ticket without changing visible state.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn snapshot(&self) -> PageSnapshot<T>
    where
        T: Clone,
    {
        PageSnapshot {
            data: self.accumulated.clone(),
            phase: self.phase,
            loading: self.phase == LoaderPhase::InitialLoading,
            loading_more: self.phase == LoaderPhase::LoadingMore,
            has_more: !self.phase.is_exhausted(),
            current_page: self.current_page_index,
            total_count: self.total_count,
            error: self.last_error.clone(),
        }
    }

    fn ticket(&self, kind: FetchKind, page_index: usize) -> FetchTicket {
        FetchTicket {
            generation: self.generation,
            page_index,
            request: PageRequest::for_page(page_index, self.config.page_size_nonzero()),
            kind,
        }
    }
}
