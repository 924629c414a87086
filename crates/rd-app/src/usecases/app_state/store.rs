use std::sync::Arc;

use anyhow::Context;
use tokio::sync::{watch, Mutex};
use tracing::{info, info_span, warn, Instrument};

use rd_core::app_state::{AppState, AppStateAction, AppStateError};
use rd_core::ports::{AppStateRepositoryPort, ClockPort};

#[derive(Debug, thiserror::Error)]
pub enum AppStateStoreError {
    #[error(transparent)]
    Rejected(#[from] AppStateError),

    #[error("failed to persist app state")]
    Persist(#[source] anyhow::Error),
}

/// Single writer of the client app state.
///
/// `dispatch` reduces, stamps, persists, then publishes. Writes are
/// serialized; a failed save leaves the published state untouched.
pub struct AppStateStore {
    repo: Arc<dyn AppStateRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    write_lock: Mutex<()>,
    published: watch::Sender<AppState>,
}

impl AppStateStore {
    /// Loads the persisted state and builds a store around it.
    pub async fn hydrate(
        repo: Arc<dyn AppStateRepositoryPort>,
        clock: Arc<dyn ClockPort>,
    ) -> anyhow::Result<Self> {
        let span = info_span!("usecase.app_state.hydrate");
        let state = repo
            .load()
            .instrument(span)
            .await
            .context("failed to hydrate app state")?;
        info!(
            schema_version = state.schema_version,
            list_page_size = state.list_page_size,
            "App state hydrated"
        );

        let (published, _) = watch::channel(state);
        Ok(Self {
            repo,
            clock,
            write_lock: Mutex::new(()),
            published,
        })
    }

    pub fn current(&self) -> AppState {
        self.published.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.published.subscribe()
    }

    /// Applies one action and returns the state that was persisted.
    pub async fn dispatch(&self, action: AppStateAction) -> Result<AppState, AppStateStoreError> {
        let span = info_span!("usecase.app_state.dispatch", action = ?action);

        async {
            let _guard = self.write_lock.lock().await;
            let previous = self.current();

            let mut next = previous.reduce(action).inspect_err(|err| {
                warn!(error = %err, "App state action rejected");
            })?;
            next.updated_at_ms = self.clock.now_ms();

            self.repo
                .save(&next)
                .await
                .map_err(AppStateStoreError::Persist)?;

            info!(changed = %describe_changes(&previous, &next), "App state updated");
            self.published.send_replace(next.clone());
            Ok::<_, AppStateStoreError>(next)
        }
        .instrument(span)
        .await
    }
}

fn describe_changes(old: &AppState, new: &AppState) -> String {
    let mut parts = Vec::new();
    if old.selected_office != new.selected_office {
        parts.push(format!(
            "selected_office: {:?} → {:?}",
            old.selected_office.as_ref().map(|id| id.as_str()),
            new.selected_office.as_ref().map(|id| id.as_str())
        ));
    }
    if old.referral_period != new.referral_period {
        parts.push(format!(
            "referral_period: {:?} → {:?}",
            old.referral_period, new.referral_period
        ));
    }
    if old.list_page_size != new.list_page_size {
        parts.push(format!(
            "list_page_size: {} → {}",
            old.list_page_size, new.list_page_size
        ));
    }
    if old.sidebar_collapsed != new.sidebar_collapsed {
        parts.push(format!(
            "sidebar_collapsed: {} → {}",
            old.sidebar_collapsed, new.sidebar_collapsed
        ));
    }
    if old.theme != new.theme {
        parts.push(format!("theme: {:?} → {:?}", old.theme, new.theme));
    }

    if parts.is_empty() {
        "(no changes)".to_string()
    } else {
        parts.join(", ")
    }
}
