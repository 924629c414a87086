use super::model::*;
use crate::paging::DEFAULT_PAGE_SIZE;

impl Default for AppState {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            selected_office: None,
            referral_period: None,
            list_page_size: DEFAULT_PAGE_SIZE,
            sidebar_collapsed: false,
            theme: Theme::System,
            updated_at_ms: 0,
        }
    }
}
