//! # rd-core
//!
//! Core domain models and business logic for ReferralDesk.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! The incremental page loader's state machine lives in [`paging`]; the async
//! shell that drives it lives in `rd-app`.

// Public module exports
pub mod app_dirs;
pub mod app_state;
pub mod config;
pub mod date;
pub mod geo;
pub mod ids;
pub mod paging;
pub mod ports;
pub mod referral;
pub mod scroll;

// Re-export commonly used types at the crate root
pub use app_state::{AppState, AppStateAction, AppStateError, Theme};
pub use config::AppConfig;
pub use geo::GeoPoint;
pub use ids::OfficeId;
pub use paging::{
    LoaderConfig, LoaderPhase, LoaderState, PageRequest, PageResult, PageSnapshot,
};
pub use ports::{FetchError, FetchErrorKind};
pub use referral::{MonthRange, MonthlyReferralCount, ReferralMonth, ReferralSource};
pub use scroll::{ScrollDecision, ScrollPosition, ScrollTriggerPolicy};
