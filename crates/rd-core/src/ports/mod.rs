//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The core never talks to the remote
//! store, the filesystem or the wall clock directly; it goes through these
//! traits so that tests can substitute deterministic implementations.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `rd-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `rd-core/ports`.
//! Otherwise, place it in the relevant domain submodule.

pub mod app_dirs;
pub mod app_state;
mod clock;
pub mod errors;
pub mod page_source;
pub mod referral_source;

pub use clock::*;

pub use app_dirs::AppDirsPort;
pub use app_state::{AppStateMigrationPort, AppStateRepositoryPort};
pub use errors::{AppDirsError, FetchError, FetchErrorKind};
pub use page_source::{FnPageSource, PageSourcePort};
pub use referral_source::ReferralSourceRepositoryPort;
