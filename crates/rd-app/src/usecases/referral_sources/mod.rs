//! Referral-source queries.

mod list_nearby;
mod page_source;

pub use list_nearby::{ListNearbyOffices, NearbyOffice};
pub use page_source::{ReferralSourcePageSource, DEFAULT_MAX_WINDOW};
