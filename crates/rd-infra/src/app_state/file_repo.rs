use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use rd_core::{
    app_state::{AppState, CURRENT_SCHEMA_VERSION},
    ports::AppStateRepositoryPort,
};

use crate::app_state::migration::AppStateMigrator;

/// App state persisted as one pretty-printed JSON document.
pub struct FileAppStateRepository {
    path: PathBuf,
    migrator: AppStateMigrator,
}

impl FileAppStateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            migrator: AppStateMigrator::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create app state dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Writes next to the target and renames over it, so readers see either
    /// the old document or the complete new one.
    async fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp app state failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp app state to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl AppStateRepositoryPort for FileAppStateRepository {
    async fn load(&self) -> Result<AppState> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no app state on disk, using defaults");
                return Ok(AppState::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read app state failed: {}", self.path.display()))
            }
        };

        let document: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("parse app state failed: {}", self.path.display()))?;
        let (migrated, original_version) = self.migrator.migrate_to_latest(document)?;
        let state: AppState =
            serde_json::from_value(migrated).context("decode migrated app state failed")?;

        if original_version < CURRENT_SCHEMA_VERSION {
            self.save(&state).await?;
        }

        Ok(state)
    }

    async fn save(&self, state: &AppState) -> Result<()> {
        let content = serde_json::to_string_pretty(state).context("serialize app state failed")?;

        self.atomic_write(&content).await
    }
}
