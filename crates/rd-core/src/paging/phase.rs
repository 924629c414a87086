use serde::{Deserialize, Serialize};

/// Where an incremental loader is in its lifecycle.
///
/// ```text
/// Idle ──load──▶ InitialLoading ──▶ Ready | Exhausted | Failed
/// Ready ──load_more──▶ LoadingMore ──▶ Ready | Exhausted | Failed
/// Failed ──load_more / refresh──▶ (loading again)
/// Exhausted ──refresh──▶ InitialLoading
/// any ──reset──▶ Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderPhase {
    Idle,
    InitialLoading,
    LoadingMore,
    Ready,
    Exhausted,
    Failed,
}

impl LoaderPhase {
    /// A fetch is in flight.
    pub fn is_loading(self) -> bool {
        matches!(self, LoaderPhase::InitialLoading | LoaderPhase::LoadingMore)
    }

    pub fn is_exhausted(self) -> bool {
        self == LoaderPhase::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fetching_phases_count_as_loading() {
        assert!(LoaderPhase::InitialLoading.is_loading());
        assert!(LoaderPhase::LoadingMore.is_loading());
        for phase in [
            LoaderPhase::Idle,
            LoaderPhase::Ready,
            LoaderPhase::Exhausted,
            LoaderPhase::Failed,
        ] {
            assert!(!phase.is_loading(), "{phase:?}");
        }
    }
}
