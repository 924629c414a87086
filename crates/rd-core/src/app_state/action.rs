use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{AppState, Theme, MAX_LIST_PAGE_SIZE};
use crate::ids::OfficeId;
use crate::referral::MonthRange;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppStateError {
    #[error("invalid app state change: {0}")]
    Validation(String),
}

/// Every way the app state can change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppStateAction {
    SelectOffice { office_id: OfficeId },
    ClearOffice,
    SetReferralPeriod { period: MonthRange },
    ClearReferralPeriod,
    SetListPageSize { page_size: usize },
    ToggleSidebar,
    SetTheme { theme: Theme },
}

impl AppState {
    /// Pure reducer. Rejected actions leave `self` as it was.
    pub fn reduce(&self, action: AppStateAction) -> Result<AppState, AppStateError> {
        let mut next = self.clone();
        match action {
            AppStateAction::SelectOffice { office_id } => next.selected_office = Some(office_id),
            AppStateAction::ClearOffice => next.selected_office = None,
            AppStateAction::SetReferralPeriod { period } => {
                if period.start() > period.end() {
                    return Err(AppStateError::Validation(format!(
                        "referral period {} .. {} is inverted",
                        period.start(),
                        period.end()
                    )));
                }
                next.referral_period = Some(period);
            }
            AppStateAction::ClearReferralPeriod => next.referral_period = None,
            AppStateAction::SetListPageSize { page_size } => {
                if page_size == 0 || page_size > MAX_LIST_PAGE_SIZE {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(page_size, "rejected list page size");
                    return Err(AppStateError::Validation(format!(
                        "list page size must be within 1..={MAX_LIST_PAGE_SIZE}, got {page_size}"
                    )));
                }
                next.list_page_size = page_size;
            }
            AppStateAction::ToggleSidebar => next.sidebar_collapsed = !next.sidebar_collapsed,
            AppStateAction::SetTheme { theme } => next.theme = theme,
        }
        Ok(next)
    }
}
