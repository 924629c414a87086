//! Business logic use cases
//!
//! ```text
//! [list view scroll] ──▶ LoaderScrollBinding ──▶ InfiniteScrollTrigger
//!                                 │
//!                                 ▼
//!                      IncrementalPageLoader ──▶ PageSourcePort
//!                                                    │
//!                                                    ▼
//!                                    ReferralSourcePageSource ──▶ repository
//! ```

pub mod app_state;
pub mod infinite_scroll;
pub mod page_loader;
pub mod referral_sources;

pub use app_state::{AppStateStore, AppStateStoreError};
pub use infinite_scroll::{InfiniteScrollTrigger, LoaderScrollBinding};
pub use page_loader::{IncrementalPageLoader, LoadOutcome};
pub use referral_sources::{ListNearbyOffices, NearbyOffice, ReferralSourcePageSource};
