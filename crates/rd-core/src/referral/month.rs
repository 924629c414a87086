use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::OfficeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthError {
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),
    #[error("unrecognized month format: {0:?}")]
    Unrecognized(String),
    #[error("month range starts at {start} after it ends at {end}")]
    InvertedRange {
        start: ReferralMonth,
        end: ReferralMonth,
    },
}

/// Calendar month referral counts are logged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReferralMonth {
    year: i32,
    month: u32,
}

impl ReferralMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Accepts `YYYY-MM` and `MM/YYYY`.
    pub fn parse(input: &str) -> Result<Self, MonthError> {
        let input = input.trim();
        let unrecognized = || MonthError::Unrecognized(input.to_string());

        let (year, month) = if let Some((y, m)) = input.split_once('-') {
            (y, m)
        } else if let Some((m, y)) = input.split_once('/') {
            (y, m)
        } else {
            return Err(unrecognized());
        };
        if year.len() != 4 {
            return Err(unrecognized());
        }

        let year = year.parse::<i32>().map_err(|_| unrecognized())?;
        let month = month.parse::<u32>().map_err(|_| unrecognized())?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for ReferralMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Inclusive range of months used as the dashboard's reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRange {
    start: ReferralMonth,
    end: ReferralMonth,
}

impl MonthRange {
    pub fn new(start: ReferralMonth, end: ReferralMonth) -> Result<Self, MonthError> {
        if start > end {
            return Err(MonthError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> ReferralMonth {
        self.start
    }

    pub fn end(&self) -> ReferralMonth {
        self.end
    }

    pub fn contains(&self, month: ReferralMonth) -> bool {
        self.start <= month && month <= self.end
    }

    pub fn month_count(&self) -> u32 {
        let years = (self.end.year - self.start.year) as i64;
        (years * 12 + self.end.month as i64 - self.start.month as i64 + 1) as u32
    }
}

/// Number of referrals an office sent in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReferralCount {
    pub office_id: OfficeId,
    pub month: ReferralMonth,
    pub count: u32,
}
