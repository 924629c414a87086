//! Client app state.
//!
//! A small versioned document holding what the dashboard remembers between
//! sessions. It only changes through [`AppState::reduce`]; persistence is the
//! job of `AppStateRepositoryPort` implementations.

mod action;
mod defaults;
mod model;

pub use action::{AppStateAction, AppStateError};
pub use model::{AppState, Theme, CURRENT_SCHEMA_VERSION, MAX_LIST_PAGE_SIZE};
