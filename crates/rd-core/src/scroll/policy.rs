use serde::{Deserialize, Serialize};

use crate::scroll::ScrollPosition;

pub const DEFAULT_THRESHOLD: f64 = 100.0;
pub const DEFAULT_MIN_INTERVAL_MS: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldReason {
    OutsideThreshold,
    NoMore,
    Loading,
    /// Already fired for the current crossing.
    AlreadyFired,
    TooSoon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDecision {
    Fire,
    Hold(HoldReason),
}

impl ScrollDecision {
    pub fn should_fire(self) -> bool {
        self == ScrollDecision::Fire
    }
}

#[derive(Debug, Clone)]
pub struct ScrollTriggerPolicy {
    threshold: f64,
    min_interval_ms: i64,
    armed: bool,
    last_fired_at_ms: Option<i64>,
    last_content_extent: f64,
}

impl ScrollTriggerPolicy {
    pub fn new(threshold: f64, min_interval_ms: i64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            min_interval_ms: min_interval_ms.max(0),
            armed: true,
            last_fired_at_ms: None,
            last_content_extent: 0.0,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn min_interval_ms(&self) -> i64 {
        self.min_interval_ms
    }

    /// Decides whether this observation should trigger a load.
    ///
    /// `has_more = false` and `is_loading = true` always hold and do not
    /// consume the current crossing.
    pub fn evaluate(
        &mut self,
        position: ScrollPosition,
        has_more: bool,
        is_loading: bool,
        now_ms: i64,
    ) -> ScrollDecision {
        if position.content_extent != self.last_content_extent {
            self.armed = true;
        }
        self.last_content_extent = position.content_extent;

        if position.remaining() > self.threshold {
            self.armed = true;
            return ScrollDecision::Hold(HoldReason::OutsideThreshold);
        }
        if !has_more {
            return ScrollDecision::Hold(HoldReason::NoMore);
        }
        if is_loading {
            return ScrollDecision::Hold(HoldReason::Loading);
        }
        if !self.armed {
            return ScrollDecision::Hold(HoldReason::AlreadyFired);
        }
        if let Some(last) = self.last_fired_at_ms {
            if now_ms.saturating_sub(last) < self.min_interval_ms {
                return ScrollDecision::Hold(HoldReason::TooSoon);
            }
        }

        self.armed = false;
        self.last_fired_at_ms = Some(now_ms);
        ScrollDecision::Fire
    }

    /// Forget all history, e.g. after the list was reset.
    pub fn reset(&mut self) {
        self.armed = true;
        self.last_fired_at_ms = None;
        self.last_content_extent = 0.0;
    }
}

impl Default for ScrollTriggerPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_MIN_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near_end(content: f64) -> ScrollPosition {
        ScrollPosition::new(content - 250.0, 200.0, content)
    }

    fn far_from_end(content: f64) -> ScrollPosition {
        ScrollPosition::new(0.0, 200.0, content)
    }

    #[test]
    fn fires_once_per_crossing() {
        let mut policy = ScrollTriggerPolicy::new(100.0, 0);
        assert_eq!(policy.evaluate(near_end(1000.0), true, false, 0), ScrollDecision::Fire);
        assert_eq!(
            policy.evaluate(near_end(1000.0), true, false, 10),
            ScrollDecision::Hold(HoldReason::AlreadyFired)
        );

        assert_eq!(
            policy.evaluate(far_from_end(1000.0), true, false, 20),
            ScrollDecision::Hold(HoldReason::OutsideThreshold)
        );
        assert_eq!(policy.evaluate(near_end(1000.0), true, false, 30), ScrollDecision::Fire);
    }

    #[test]
    fn content_growth_rearms() {
        let mut policy = ScrollTriggerPolicy::new(100.0, 0);
        assert!(policy.evaluate(near_end(1000.0), true, false, 0).should_fire());
        assert!(policy.evaluate(near_end(2000.0), true, false, 5).should_fire());
    }

    #[test]
    fn content_shrinking_rearms() {
        let mut policy = ScrollTriggerPolicy::new(100.0, 0);
        assert!(policy.evaluate(near_end(2000.0), true, false, 0).should_fire());
        assert!(policy.evaluate(near_end(600.0), true, false, 5).should_fire());
        assert_eq!(
            policy.evaluate(near_end(600.0), true, false, 10),
            ScrollDecision::Hold(HoldReason::AlreadyFired)
        );
    }

    #[test]
    fn never_fires_without_more_or_while_loading() {
        let mut policy = ScrollTriggerPolicy::default();
        assert_eq!(
            policy.evaluate(near_end(1000.0), false, false, 0),
            ScrollDecision::Hold(HoldReason::NoMore)
        );
        assert_eq!(
            policy.evaluate(near_end(1000.0), true, true, 0),
            ScrollDecision::Hold(HoldReason::Loading)
        );
        // Holding did not consume the crossing.
        assert!(policy.evaluate(near_end(1000.0), true, false, 0).should_fire());
    }

    #[test]
    fn min_interval_suppresses_rapid_refires() {
        let mut policy = ScrollTriggerPolicy::new(100.0, 500);
        assert!(policy.evaluate(near_end(1000.0), true, false, 1_000).should_fire());
        assert_eq!(
            policy.evaluate(near_end(2000.0), true, false, 1_200),
            ScrollDecision::Hold(HoldReason::TooSoon)
        );
        assert!(policy.evaluate(near_end(2000.0), true, false, 1_600).should_fire());
    }

    #[test]
    fn negative_settings_are_clamped() {
        let policy = ScrollTriggerPolicy::new(-5.0, -1);
        assert_eq!(policy.threshold(), 0.0);
        assert_eq!(policy.min_interval_ms(), 0);
    }
}
