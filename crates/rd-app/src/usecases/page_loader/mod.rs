//! Incremental page loading.

mod loader;

pub use loader::{IncrementalPageLoader, LoadOutcome};
