//! Driving `LoaderState` by hand against a `PageSourcePort`.

use rd_core::paging::{ApplyOutcome, LoaderConfig, LoaderPhase, LoaderState, PageRequest, PageResult};
use rd_core::ports::{FetchError, FetchErrorKind, FnPageSource, PageSourcePort};

fn alphabet() -> impl PageSourcePort<char> {
    FnPageSource::new(|request: PageRequest| async move {
        let letters: Vec<char> = ('a'..='z').collect();
        let end = (request.end_index() + 1).min(letters.len());
        let start = request.start_index().min(end);
        Ok::<_, FetchError>(PageResult::with_total(letters[start..end].to_vec(), letters.len()))
    })
}

#[tokio::test]
async fn state_machine_walks_a_source_to_exhaustion() {
    let source = alphabet();
    let mut state = LoaderState::new(LoaderConfig::new(10).unwrap());

    while let Ok(ticket) = state.begin_load_more() {
        let result = source.fetch_page(ticket.request()).await;
        assert!(matches!(state.complete(ticket, result), ApplyOutcome::Applied { .. }));
    }

    assert_eq!(state.phase(), LoaderPhase::Exhausted);
    assert_eq!(state.accumulated().len(), 26);
    assert_eq!(state.accumulated().last(), Some(&'z'));
    assert_eq!(state.pages_loaded(), 3);
}

#[tokio::test]
async fn failing_source_is_captured_on_the_state() {
    let source = FnPageSource::new(|_: PageRequest| async {
        Err::<PageResult<u8>, _>(FetchError::unavailable("maintenance window"))
    });
    let mut state = LoaderState::new(LoaderConfig::default());

    let ticket = state.begin_load_more().unwrap();
    let result = source.fetch_page(ticket.request()).await;

    assert_eq!(state.complete(ticket, result), ApplyOutcome::Failed);
    let snapshot = state.snapshot();
    assert_eq!(snapshot.phase, LoaderPhase::Failed);
    let error = snapshot.error.unwrap();
    assert_eq!(error.kind, FetchErrorKind::Unavailable);
    assert!(error.is_retryable());
}
