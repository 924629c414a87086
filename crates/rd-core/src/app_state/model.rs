use serde::{Deserialize, Serialize};

use crate::ids::OfficeId;
use crate::referral::MonthRange;

pub const CURRENT_SCHEMA_VERSION: u32 = 2;
pub const MAX_LIST_PAGE_SIZE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub schema_version: u32,

    #[serde(default)]
    pub selected_office: Option<OfficeId>,

    #[serde(default)]
    pub referral_period: Option<MonthRange>,

    pub list_page_size: usize,

    #[serde(default)]
    pub sidebar_collapsed: bool,

    #[serde(default)]
    pub theme: Theme,

    /// Clock time of the last accepted action.
    #[serde(default)]
    pub updated_at_ms: i64,
}
