//! Behavioural properties of `IncrementalPageLoader` under concurrent use.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use rd_app::{IncrementalPageLoader, LoadOutcome};
use rd_core::paging::{LoaderConfig, LoaderPhase, PageRequest, PageResult, SkipReason};
use rd_core::ports::{FetchError, PageSourcePort};

type Reply = oneshot::Sender<Result<PageResult<u32>, FetchError>>;

// ============================================================================
// Test sources
// ============================================================================

/// Parks every fetch until the test answers it.
struct GatedSource {
    requests: mpsc::UnboundedSender<(PageRequest, Reply)>,
}

impl GatedSource {
    fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<(PageRequest, Reply)>) {
        let (requests, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { requests }), rx)
    }
}

#[async_trait]
impl PageSourcePort<u32> for GatedSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<u32>, FetchError> {
        let (reply, answer) = oneshot::channel();
        self.requests
            .send((request, reply))
            .map_err(|_| FetchError::unavailable("test dropped the request channel"))?;
        answer
            .await
            .unwrap_or_else(|_| Err(FetchError::network("reply dropped")))
    }
}

/// Serves `0..total` immediately and counts calls.
struct CountingSource {
    total: AtomicUsize,
    calls: AtomicUsize,
}

impl CountingSource {
    fn new(total: usize) -> Arc<Self> {
        Arc::new(Self {
            total: AtomicUsize::new(total),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn grow_to(&self, total: usize) {
        self.total.store(total, Ordering::SeqCst);
    }
}

#[async_trait]
impl PageSourcePort<u32> for CountingSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<PageResult<u32>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let total = self.total.load(Ordering::SeqCst);
        Ok(PageResult::with_total(rows(request, total), total))
    }
}

fn rows(request: PageRequest, total: usize) -> Vec<u32> {
    let end = (request.end_index() + 1).min(total);
    let start = request.start_index().min(end);
    (start..end).map(|i| i as u32).collect()
}

fn config(page_size: usize) -> LoaderConfig {
    LoaderConfig::new(page_size).unwrap()
}

// ============================================================================
// Example scenario
// ============================================================================

#[tokio::test]
async fn forty_five_rows_in_pages_of_twenty() {
    let source = CountingSource::new(45);
    let loader = IncrementalPageLoader::<u32>::mount(config(20), source.clone()).await;

    let first = loader.snapshot();
    assert_eq!(first.data, (0..20).collect::<Vec<u32>>());
    assert_eq!(first.phase, LoaderPhase::Ready);
    assert_eq!(first.total_count, 45);
    assert!(first.has_more);

    assert_eq!(loader.load_more().await, LoadOutcome::Applied { received: 20 });
    assert_eq!(loader.snapshot().data.len(), 40);
    assert_eq!(loader.snapshot().current_page, 1);

    assert_eq!(loader.load_more().await, LoadOutcome::Applied { received: 5 });
    let last = loader.snapshot();
    assert_eq!(last.data, (0..45).collect::<Vec<u32>>());
    assert_eq!(last.phase, LoaderPhase::Exhausted);
    assert!(!last.has_more);

    assert_eq!(
        loader.load_more().await,
        LoadOutcome::Skipped(SkipReason::Exhausted)
    );
    assert_eq!(source.calls(), 3);
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn only_one_fetch_in_flight() {
    let (source, mut requests) = GatedSource::new();
    let loader = Arc::new(IncrementalPageLoader::<u32>::new(config(10), source));

    let first = loader.spawn_load_more();
    assert_eq!(loader.phase(), LoaderPhase::InitialLoading);
    assert_eq!(
        loader.load_more().await,
        LoadOutcome::Skipped(SkipReason::InFlight)
    );

    let (request, reply) = requests.recv().await.unwrap();
    assert_eq!(request.start_index(), 0);
    reply.send(Ok(PageResult::with_total((0..10).collect(), 30))).unwrap();
    assert_eq!(first.await.unwrap(), LoadOutcome::Applied { received: 10 });

    let second = loader.spawn_load_more();
    assert_eq!(loader.phase(), LoaderPhase::LoadingMore);
    assert_eq!(
        loader.spawn_load_more().await.unwrap(),
        LoadOutcome::Skipped(SkipReason::InFlight)
    );

    let (request, reply) = requests.recv().await.unwrap();
    assert_eq!(request.start_index(), 10);
    reply.send(Ok(PageResult::with_total((10..20).collect(), 30))).unwrap();
    assert_eq!(second.await.unwrap(), LoadOutcome::Applied { received: 10 });

    assert!(requests.try_recv().is_err());
}

#[tokio::test]
async fn refresh_discards_load_more_still_in_flight() {
    let (source, mut requests) = GatedSource::new();
    let loader = Arc::new(IncrementalPageLoader::<u32>::new(config(3), source));

    let initial = loader.spawn_load_more();
    let (_, reply) = requests.recv().await.unwrap();
    reply.send(Ok(PageResult::with_total(vec![0, 1, 2], 9))).unwrap();
    initial.await.unwrap();

    let more = loader.spawn_load_more();
    let (more_request, more_reply) = requests.recv().await.unwrap();
    assert_eq!(more_request.start_index(), 3);

    let refresh = loader.spawn_refresh();
    let (refresh_request, refresh_reply) = requests.recv().await.unwrap();
    assert_eq!(refresh_request.start_index(), 0);
    refresh_reply
        .send(Ok(PageResult::with_total(vec![100, 101, 102], 9)))
        .unwrap();
    assert_eq!(refresh.await.unwrap(), LoadOutcome::Applied { received: 3 });

    more_reply
        .send(Ok(PageResult::with_total(vec![3, 4, 5], 9)))
        .unwrap();
    assert_eq!(more.await.unwrap(), LoadOutcome::Stale);

    let snapshot = loader.snapshot();
    assert_eq!(snapshot.data, vec![100, 101, 102]);
    assert_eq!(snapshot.current_page, 0);
}

#[tokio::test]
async fn reset_discards_fetch_in_flight() {
    let (source, mut requests) = GatedSource::new();
    let loader = Arc::new(IncrementalPageLoader::<u32>::new(config(5), source));

    let pending = loader.spawn_load_more();
    let (_, reply) = requests.recv().await.unwrap();
    loader.reset();
    reply.send(Ok(PageResult::with_total(vec![1, 2, 3], 3))).unwrap();

    assert_eq!(pending.await.unwrap(), LoadOutcome::Stale);
    let snapshot = loader.snapshot();
    assert_eq!(snapshot.phase, LoaderPhase::Idle);
    assert!(snapshot.data.is_empty());
}

#[tokio::test]
async fn completion_after_unmount_is_ignored() {
    let (source, mut requests) = GatedSource::new();
    let loader = Arc::new(IncrementalPageLoader::<u32>::new(config(5), source));
    let mut updates = loader.subscribe();

    let pending = loader.spawn_load_more();
    let (_, reply) = requests.recv().await.unwrap();
    let _ = updates.borrow_and_update();

    loader.unmount();
    reply.send(Ok(PageResult::with_total(vec![1, 2, 3], 3))).unwrap();

    assert_eq!(pending.await.unwrap(), LoadOutcome::Inactive);
    assert!(!updates.has_changed().unwrap());
    assert!(loader.snapshot().data.is_empty());
    assert_eq!(loader.load_more().await, LoadOutcome::Inactive);
    assert!(requests.try_recv().is_err());
}

// ============================================================================
// Accumulation, refresh, reset
// ============================================================================

#[tokio::test]
async fn accumulation_is_monotonic_between_refreshes() {
    let source = CountingSource::new(57);
    let loader = IncrementalPageLoader::<u32>::mount(config(10), source).await;

    let mut previous = loader.snapshot().data;
    while loader.snapshot().has_more {
        loader.load_more().await;
        let current = loader.snapshot().data;
        assert!(current.len() >= previous.len());
        assert_eq!(&current[..previous.len()], previous.as_slice());
        previous = current;
    }
    assert_eq!(previous.len(), 57);
}

#[tokio::test]
async fn failed_load_keeps_accumulated_and_can_retry() {
    let (source, mut requests) = GatedSource::new();
    let loader = Arc::new(IncrementalPageLoader::<u32>::new(config(2), source));

    let initial = loader.spawn_load_more();
    let (_, reply) = requests.recv().await.unwrap();
    reply.send(Ok(PageResult::with_total(vec![0, 1], 6))).unwrap();
    initial.await.unwrap();

    let failing = loader.spawn_load_more();
    let (_, reply) = requests.recv().await.unwrap();
    reply.send(Err(FetchError::network("timeout"))).unwrap();
    assert_eq!(failing.await.unwrap(), LoadOutcome::Failed);

    let snapshot = loader.snapshot();
    assert_eq!(snapshot.phase, LoaderPhase::Failed);
    assert_eq!(snapshot.data, vec![0, 1]);
    assert_eq!(snapshot.error, Some(FetchError::network("timeout")));

    let retry = loader.spawn_load_more();
    let retrying = loader.snapshot();
    assert!(retrying.loading_more);
    assert!(retrying.error.is_none());

    let (request, reply) = requests.recv().await.unwrap();
    assert_eq!(request.start_index(), 2);
    reply.send(Ok(PageResult::with_total(vec![2, 3], 6))).unwrap();
    assert_eq!(retry.await.unwrap(), LoadOutcome::Applied { received: 2 });
    assert_eq!(loader.snapshot().error, None);
}

#[tokio::test]
async fn refresh_is_idempotent_on_unchanged_source() {
    let source = CountingSource::new(35);
    let loader = IncrementalPageLoader::<u32>::mount(config(10), source).await;
    loader.load_more().await;

    loader.refresh().await;
    let once = loader.snapshot();
    loader.refresh().await;
    let twice = loader.snapshot();

    assert_eq!(once, twice);
    assert_eq!(twice.data, (0..10).collect::<Vec<u32>>());
}

#[tokio::test]
async fn refresh_unexhausts_a_grown_source() {
    let source = CountingSource::new(4);
    let loader = IncrementalPageLoader::<u32>::mount(config(10), source.clone()).await;
    assert_eq!(loader.phase(), LoaderPhase::Exhausted);

    source.grow_to(25);
    loader.refresh().await;

    let snapshot = loader.snapshot();
    assert_eq!(snapshot.phase, LoaderPhase::Ready);
    assert!(snapshot.has_more);
    assert_eq!(snapshot.total_count, 25);
}

#[tokio::test]
async fn reset_never_fetches() {
    let source = CountingSource::new(30);
    let loader = IncrementalPageLoader::<u32>::mount(config(10), source.clone()).await;
    let calls_before = source.calls();

    loader.reset();

    assert_eq!(source.calls(), calls_before);
    let snapshot = loader.snapshot();
    assert_eq!(snapshot.phase, LoaderPhase::Idle);
    assert_eq!(snapshot.total_count, 0);
    assert_eq!(snapshot.current_page, 0);
    assert!(snapshot.error.is_none());
}

#[tokio::test]
async fn refresh_after_failure_shows_loading_without_the_old_error() {
    let (source, mut requests) = GatedSource::new();
    let loader = Arc::new(IncrementalPageLoader::<u32>::new(config(4), source));
    let mut updates = loader.subscribe();

    let initial = loader.spawn_load_more();
    let (_, reply) = requests.recv().await.unwrap();
    reply.send(Err(FetchError::unavailable("maintenance"))).unwrap();
    assert_eq!(initial.await.unwrap(), LoadOutcome::Failed);
    assert!(updates.borrow_and_update().error.is_some());

    let refresh = loader.spawn_refresh();
    {
        let published = updates.borrow_and_update();
        assert!(published.loading);
        assert!(published.error.is_none());
    }

    let (_, reply) = requests.recv().await.unwrap();
    reply.send(Ok(PageResult::with_total(vec![0, 1, 2, 3], 8))).unwrap();
    assert_eq!(refresh.await.unwrap(), LoadOutcome::Applied { received: 4 });
    assert_eq!(loader.phase(), LoaderPhase::Ready);
}
