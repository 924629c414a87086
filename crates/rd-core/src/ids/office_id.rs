use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable identifier of a partner office (a referral source).
///
/// Ids are assigned by the remote store; locally created offices get a
/// random v4 UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficeId(String);

impl OfficeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for OfficeId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OfficeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OfficeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OfficeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for OfficeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
