//! Referral-source domain types.

mod month;
mod source;

pub use month::{MonthError, MonthRange, MonthlyReferralCount, ReferralMonth};
pub use source::ReferralSource;
