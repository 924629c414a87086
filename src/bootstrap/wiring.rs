//! Builds concrete adapters from the resolved configuration.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use rd_app::deps::AppDeps;
use rd_app::AppStateStore;
use rd_core::config::AppConfig;
use rd_core::paging::DEFAULT_PAGE_SIZE;
use rd_core::ports::ClockPort;
use rd_core::scroll::{ScrollTriggerPolicy, DEFAULT_MIN_INTERVAL_MS, DEFAULT_THRESHOLD};
use rd_infra::{FileAppStateRepository, InMemoryReferralSourceRepository, SystemClock};

/// List behaviour after empty config values were replaced by defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListSettings {
    /// `None` when the config leaves it to the persisted app state.
    pub page_size: Option<usize>,
    pub scroll_threshold: f64,
    pub scroll_min_interval_ms: i64,
}

impl ListSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            page_size: (config.page_size > 0).then_some(config.page_size),
            scroll_threshold: if config.scroll_threshold > 0.0 {
                config.scroll_threshold
            } else {
                DEFAULT_THRESHOLD
            },
            scroll_min_interval_ms: if config.scroll_min_interval_ms > 0 {
                config.scroll_min_interval_ms
            } else {
                DEFAULT_MIN_INTERVAL_MS
            },
        }
    }

    pub fn scroll_policy(&self) -> ScrollTriggerPolicy {
        ScrollTriggerPolicy::new(self.scroll_threshold, self.scroll_min_interval_ms)
    }

    /// CLI flag first, then config, then the user's saved preference.
    pub fn effective_page_size(&self, flag: Option<usize>, saved: usize) -> usize {
        flag.or(self.page_size)
            .unwrap_or(if saved > 0 { saved } else { DEFAULT_PAGE_SIZE })
    }
}

pub struct AppRuntime {
    pub deps: AppDeps,
    pub store: AppStateStore,
    pub list: ListSettings,
}

/// Wires the in-memory source store, the file-backed app state and the
/// system clock.
pub async fn build_runtime(config: &AppConfig) -> anyhow::Result<AppRuntime> {
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    build_runtime_with_clock(config, clock).await
}

pub async fn build_runtime_with_clock(
    config: &AppConfig,
    clock: Arc<dyn ClockPort>,
) -> anyhow::Result<AppRuntime> {
    let referral_sources = InMemoryReferralSourceRepository::from_json_file(&config.sources_path)
        .await
        .context("failed to load referral sources")?;
    info!(count = referral_sources.len(), "referral source repository ready");

    let deps = AppDeps {
        referral_sources: Arc::new(referral_sources),
        app_state: Arc::new(FileAppStateRepository::new(&config.state_path)),
        clock,
    };
    let store =
        AppStateStore::hydrate(Arc::clone(&deps.app_state), Arc::clone(&deps.clock)).await?;

    Ok(AppRuntime {
        deps,
        store,
        list: ListSettings::from_config(config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rd_core::ports::ReferralSourceRepositoryPort;
    use rd_infra::ManualClock;
    use tempfile::TempDir;

    #[test]
    fn empty_config_values_fall_back_to_defaults() {
        let settings = ListSettings::from_config(&AppConfig::empty());

        assert_eq!(settings.page_size, None);
        assert_eq!(settings.scroll_threshold, DEFAULT_THRESHOLD);
        assert_eq!(settings.scroll_min_interval_ms, DEFAULT_MIN_INTERVAL_MS);
    }

    #[test]
    fn page_size_precedence() {
        let mut config = AppConfig::empty();
        let unset = ListSettings::from_config(&config);
        assert_eq!(unset.effective_page_size(None, 35), 35);
        assert_eq!(unset.effective_page_size(Some(5), 35), 5);
        assert_eq!(unset.effective_page_size(None, 0), DEFAULT_PAGE_SIZE);

        config.page_size = 15;
        let configured = ListSettings::from_config(&config);
        assert_eq!(configured.effective_page_size(None, 35), 15);
        assert_eq!(configured.effective_page_size(Some(5), 35), 5);
    }

    #[tokio::test]
    async fn runtime_starts_on_an_empty_data_dir() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::with_system_defaults(dir.path().to_path_buf());

        let runtime = build_runtime_with_clock(&config, Arc::new(ManualClock::new(0)))
            .await
            .unwrap();

        assert_eq!(runtime.deps.referral_sources.count_sources().await.unwrap(), 0);
        assert_eq!(runtime.store.current(), rd_core::AppState::default());
    }
}
