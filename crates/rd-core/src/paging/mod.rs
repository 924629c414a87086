//! Incremental paging domain.
//!
//! Everything here is synchronous and pure: index windows, loader
//! configuration, the loader phase machine and the read-only snapshot the
//! consumer sees. The async loader in `rd-app` owns a [`LoaderState`] and
//! drives it with [`LoaderState::begin_load_more`],
//! [`LoaderState::begin_refresh`] and [`LoaderState::complete`].

mod config;
mod phase;
mod request;
mod result;
mod snapshot;
mod state;

pub use config::{LoaderConfig, LoaderConfigError, DEFAULT_PAGE_SIZE};
pub use phase::LoaderPhase;
pub use request::{PageRequest, PageRequestError};
pub use result::PageResult;
pub use snapshot::PageSnapshot;
pub use state::{ApplyOutcome, FetchKind, FetchTicket, LoaderState, SkipReason};
