use async_trait::async_trait;

use crate::app_state::AppState;

/// Persistence boundary of the client app state.
#[async_trait]
pub trait AppStateRepositoryPort: Send + Sync {
    /// Hydrates the state. A store with nothing persisted yet returns
    /// `AppState::default()`.
    async fn load(&self) -> anyhow::Result<AppState>;
    async fn save(&self, state: &AppState) -> anyhow::Result<()>;
}

/// One schema step of the persisted app state.
///
/// Migrations operate on raw JSON because older documents do not
/// deserialize into the current [`AppState`].
pub trait AppStateMigrationPort: Send + Sync {
    fn from_version(&self) -> u32;
    fn to_version(&self) -> u32;
    fn migrate(&self, document: serde_json::Value) -> anyhow::Result<serde_json::Value>;
}
