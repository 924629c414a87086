use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ids::OfficeId;

/// A partner office that sends patients to the practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralSource {
    pub id: OfficeId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    pub created_at_ms: i64,
}

impl ReferralSource {
    pub fn new(id: impl Into<OfficeId>, name: impl Into<String>, created_at_ms: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            location: None,
            created_at_ms,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }
}
