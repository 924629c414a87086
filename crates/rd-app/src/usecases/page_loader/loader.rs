use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, debug_span, warn, Instrument};

use rd_core::paging::{
    ApplyOutcome, FetchTicket, LoaderConfig, LoaderPhase, LoaderState, PageSnapshot, SkipReason,
};
use rd_core::ports::PageSourcePort;

/// Result of one `load_more` / `refresh` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was merged into the list.
    Applied { received: usize },
    /// No fetch was started.
    Skipped(SkipReason),
    /// The fetch failed; the error is on the snapshot.
    Failed,
    /// A refresh or reset superseded the fetch while it was in flight.
    Stale,
    /// The loader was unmounted.
    Inactive,
}

impl From<ApplyOutcome> for LoadOutcome {
    fn from(outcome: ApplyOutcome) -> Self {
        match outcome {
            ApplyOutcome::Applied { received } => LoadOutcome::Applied { received },
            ApplyOutcome::Failed => LoadOutcome::Failed,
            ApplyOutcome::Stale => LoadOutcome::Stale,
        }
    }
}

/// Accumulates fixed-size pages from a [`PageSourcePort`] for one list view.
///
/// All mutation goes through [`LoaderState`]; this type only sequences the
/// fetches and publishes snapshots. The state lock is never held across the
/// fetch, so `load_more` observed during a fetch sees the loading phase and
/// declines.
pub struct IncrementalPageLoader<T: Send> {
    source: Arc<dyn PageSourcePort<T>>,
    state: Mutex<LoaderState<T>>,
    snapshots: watch::Sender<PageSnapshot<T>>,
    active: AtomicBool,
}

impl<T> IncrementalPageLoader<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an idle loader. Nothing is fetched until `load_more` or
    /// `refresh` is called.
    pub fn new(config: LoaderConfig, source: Arc<dyn PageSourcePort<T>>) -> Self {
        let state = LoaderState::new(config);
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            source,
            state: Mutex::new(state),
            snapshots,
            active: AtomicBool::new(true),
        }
    }

    /// Creates a loader for a view that just appeared, fetching the first
    /// page before returning when the config is eager.
    pub async fn mount(config: LoaderConfig, source: Arc<dyn PageSourcePort<T>>) -> Arc<Self> {
        let eager = config.is_eager();
        let loader = Arc::new(Self::new(config, source));
        if eager {
            let outcome = loader.load_more().await;
            debug!(?outcome, "initial page loaded on mount");
        }
        loader
    }

    /// Fetches the next page and appends it.
    ///
    /// Declines without fetching while another fetch is in flight or after
    /// the source reported its last page.
    pub async fn load_more(&self) -> LoadOutcome {
        match self.begin(|state| state.begin_load_more()) {
            Ok(ticket) => self.run(ticket).await,
            Err(outcome) => outcome,
        }
    }

    /// Re-fetches the first page and replaces the list with it.
    ///
    /// Any fetch still in flight is superseded and its result discarded.
    pub async fn refresh(&self) -> LoadOutcome {
        match self.begin(|state| Ok(state.begin_refresh())) {
            Ok(ticket) => self.run(ticket).await,
            Err(outcome) => outcome,
        }
    }

    /// `load_more` on a background task. The fetch is registered before
    /// this returns, so an immediate second call already sees it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_load_more(self: &Arc<Self>) -> JoinHandle<LoadOutcome> {
        let begun = self.begin(|state| state.begin_load_more());
        self.spawn_run(begun)
    }

    /// `refresh` on a background task.
    pub fn spawn_refresh(self: &Arc<Self>) -> JoinHandle<LoadOutcome> {
        let begun = self.begin(|state| Ok(state.begin_refresh()));
        self.spawn_run(begun)
    }

    /// Clears everything back to the construction state. Does not fetch.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.reset();
        self.publish(&state);
        debug!("page loader reset");
    }

    /// Detaches the loader from its view. Fetches still in flight settle
    /// without touching state; later calls are no-ops.
    pub fn unmount(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            self.lock().invalidate();
            debug!("page loader unmounted");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> PageSnapshot<T> {
        self.lock().snapshot()
    }

    /// Current phase, without cloning the accumulated items.
    pub fn phase(&self) -> LoaderPhase {
        self.lock().phase()
    }

    /// Receives a fresh snapshot after every visible state change.
    pub fn subscribe(&self) -> watch::Receiver<PageSnapshot<T>> {
        self.snapshots.subscribe()
    }

    fn begin<F>(&self, start: F) -> Result<FetchTicket, LoadOutcome>
    where
        F: FnOnce(&mut LoaderState<T>) -> Result<FetchTicket, SkipReason>,
    {
        if !self.is_active() {
            return Err(LoadOutcome::Inactive);
        }
        let mut state = self.lock();
        match start(&mut state) {
            Ok(ticket) => {
                self.publish(&state);
                Ok(ticket)
            }
            Err(reason) => {
                debug!(?reason, "load skipped");
                Err(LoadOutcome::Skipped(reason))
            }
        }
    }

    fn spawn_run(
        self: &Arc<Self>,
        begun: Result<FetchTicket, LoadOutcome>,
    ) -> JoinHandle<LoadOutcome> {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            match begun {
                Ok(ticket) => this.run(ticket).await,
                Err(outcome) => outcome,
            }
        })
    }

    async fn run(&self, ticket: FetchTicket) -> LoadOutcome {
        let request = ticket.request();
        let span = debug_span!(
            "usecase.page_loader.fetch",
            kind = ?ticket.kind(),
            page_index = ticket.page_index(),
            start = request.start_index(),
            end = request.end_index(),
        );

        let result = self.source.fetch_page(request).instrument(span).await;

        if !self.is_active() {
            debug!(page_index = ticket.page_index(), "fetch settled after unmount");
            return LoadOutcome::Inactive;
        }

        let mut state = self.lock();
        let outcome = state.complete(ticket, result);
        match outcome {
            ApplyOutcome::Applied { received } => {
                debug!(
                    received,
                    accumulated = state.accumulated().len(),
                    phase = ?state.phase(),
                    "page applied"
                );
                self.publish(&state);
            }
            ApplyOutcome::Failed => {
                if let Some(err) = state.last_error() {
                    warn!(error = %err, page_index = ticket.page_index(), "page fetch failed");
                }
                self.publish(&state);
            }
            ApplyOutcome::Stale => {}
        }
        outcome.into()
    }

    fn publish(&self, state: &LoaderState<T>) {
        self.snapshots.send_replace(state.snapshot());
    }

    fn lock(&self) -> MutexGuard<'_, LoaderState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
