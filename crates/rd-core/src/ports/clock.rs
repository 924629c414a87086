use chrono::{DateTime, Utc};

/// Source of "now" for every component that needs time.
///
/// Passed explicitly instead of read from a global so tests can pin it.
pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    fn now_utc(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.now_ms()).unwrap_or_default()
    }
}
