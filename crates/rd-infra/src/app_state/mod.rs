pub mod file_repo;
pub mod migration;

pub use file_repo::FileAppStateRepository;
pub use migration::{AppStateMigrator, MigrationV1ToV2};
