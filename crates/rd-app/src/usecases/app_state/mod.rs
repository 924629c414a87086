//! App-state use cases.

mod store;

pub use store::{AppStateStore, AppStateStoreError};
