//! # Application Dependencies
//!
//! Parameter grouping for use-case construction. Not a builder: every
//! field is required and nothing is defaulted.

use std::sync::Arc;

use rd_core::ports::{AppStateRepositoryPort, ClockPort, ReferralSourceRepositoryPort};

use crate::usecases::{ListNearbyOffices, ReferralSourcePageSource};

pub struct AppDeps {
    pub referral_sources: Arc<dyn ReferralSourceRepositoryPort>,
    pub app_state: Arc<dyn AppStateRepositoryPort>,
    pub clock: Arc<dyn ClockPort>,
}

impl AppDeps {
    pub fn referral_page_source(&self) -> ReferralSourcePageSource {
        ReferralSourcePageSource::new(Arc::clone(&self.referral_sources))
    }

    pub fn list_nearby_offices(&self) -> ListNearbyOffices {
        ListNearbyOffices::new(Arc::clone(&self.referral_sources))
    }
}
