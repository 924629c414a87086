//! ReferralDesk Application Orchestration Layer
//!
//! This crate contains the use cases that sit between list views and the
//! ports defined in `rd-core`: the incremental page loader and its
//! infinite-scroll binding, the app-state store, and the referral-source
//! queries.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use usecases::{
    AppStateStore, IncrementalPageLoader, InfiniteScrollTrigger, ListNearbyOffices, LoadOutcome,
    LoaderScrollBinding, ReferralSourcePageSource,
};
