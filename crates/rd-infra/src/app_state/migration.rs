use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;

use rd_core::app_state::CURRENT_SCHEMA_VERSION;
use rd_core::paging::DEFAULT_PAGE_SIZE;
use rd_core::ports::AppStateMigrationPort;

/// Walks a persisted document up to [`CURRENT_SCHEMA_VERSION`] one step
/// at a time.
pub struct AppStateMigrator {
    migrations: Vec<Box<dyn AppStateMigrationPort>>,
}

impl Default for AppStateMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStateMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![Box::new(MigrationV1ToV2)],
        }
    }

    pub fn with_migrations(migrations: Vec<Box<dyn AppStateMigrationPort>>) -> Self {
        Self { migrations }
    }

    /// Returns the migrated document and the version it started at.
    pub fn migrate_to_latest(&self, mut document: Value) -> Result<(Value, u32)> {
        let original = schema_version(&document)?;
        if original > CURRENT_SCHEMA_VERSION {
            bail!(
                "app state schema version {original} is newer than supported version {CURRENT_SCHEMA_VERSION}"
            );
        }

        let mut current = original;
        while current < CURRENT_SCHEMA_VERSION {
            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .ok_or_else(|| anyhow!("no app state migration from version {current}"))?;

            document = migration
                .migrate(document)
                .with_context(|| format!("app state migration from version {current} failed"))?;

            let next = schema_version(&document)?;
            if next != migration.to_version() {
                bail!(
                    "app state migration from version {current} produced version {next}, expected {}",
                    migration.to_version()
                );
            }
            tracing::info!(from = current, to = next, "app state migrated");
            current = next;
        }

        Ok((document, original))
    }
}

/// Documents written before versioning carry no `schema_version`; they are
/// treated as version 1.
fn schema_version(document: &Value) -> Result<u32> {
    let object = document
        .as_object()
        .ok_or_else(|| anyhow!("app state document is not a JSON object"))?;
    match object.get("schema_version") {
        None => Ok(1),
        Some(value) => value
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| anyhow!("invalid schema_version: {value}")),
    }
}

/// V1 had no list page size and called the sidebar flag `collapsed`.
pub struct MigrationV1ToV2;

impl AppStateMigrationPort for MigrationV1ToV2 {
    fn from_version(&self) -> u32 {
        1
    }

    fn to_version(&self) -> u32 {
        2
    }

    fn migrate(&self, document: Value) -> Result<Value> {
        let Value::Object(mut object) = document else {
            bail!("app state document is not a JSON object");
        };

        if let Some(collapsed) = object.remove("collapsed") {
            object.entry("sidebar_collapsed").or_insert(collapsed);
        }
        object
            .entry("list_page_size")
            .or_insert_with(|| Value::from(DEFAULT_PAGE_SIZE));
        object.insert("schema_version".to_string(), Value::from(2u32));

        Ok(Value::Object(object))
    }
}
