//! Infinite-scroll trigger policy.
//!
//! Decides when a "near the end" signal should turn into a `load_more`.
//! The policy is a latch: it fires once when the position enters the
//! threshold zone and re-arms only after the position leaves the zone or the
//! content grows. A minimum interval between fires guards against bursts of
//! scroll events that arrive faster than the UI throttles them.

mod policy;
mod position;

pub use policy::{
    HoldReason, ScrollDecision, ScrollTriggerPolicy, DEFAULT_MIN_INTERVAL_MS, DEFAULT_THRESHOLD,
};
pub use position::ScrollPosition;
