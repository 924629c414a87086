use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, info};

use rd_core::ports::{FetchError, ReferralSourceRepositoryPort};
use rd_core::referral::ReferralSource;

/// Referral sources held in memory, in insertion order.
///
/// Stands in for the remote store in the CLI and in tests. Rows can be
/// added while loaders are reading, which is how a list grows between a
/// refresh and the next one.
#[derive(Debug, Default)]
pub struct InMemoryReferralSourceRepository {
    rows: RwLock<Vec<ReferralSource>>,
}

impl InMemoryReferralSourceRepository {
    pub fn new(rows: Vec<ReferralSource>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Seeds from a JSON array of sources. A missing file gives an empty
    /// repository.
    pub async fn from_json_file(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no referral source seed file, starting empty");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read referral sources failed: {}", path.display()))
            }
        };

        let rows: Vec<ReferralSource> = serde_json::from_str(&content)
            .with_context(|| format!("parse referral sources failed: {}", path.display()))?;
        info!(count = rows.len(), path = %path.display(), "referral sources seeded");
        Ok(Self::new(rows))
    }

    pub fn insert(&self, source: ReferralSource) {
        debug!(id = %source.id, "referral source inserted");
        self.write().push(source);
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ReferralSource>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ReferralSource>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ReferralSourceRepositoryPort for InMemoryReferralSourceRepository {
    async fn list_sources(
        &self,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ReferralSource>, FetchError> {
        Ok(self.read().iter().skip(offset).take(limit).cloned().collect())
    }

    async fn count_sources(&self) -> Result<usize, FetchError> {
        Ok(self.len())
    }
}
