use serde::{Deserialize, Serialize};

/// A scroll observation in arbitrary but consistent units (pixels for a
/// rendered list, rows for a headless consumer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub offset: f64,
    pub viewport_extent: f64,
    pub content_extent: f64,
}

impl ScrollPosition {
    pub fn new(offset: f64, viewport_extent: f64, content_extent: f64) -> Self {
        Self {
            offset,
            viewport_extent,
            content_extent,
        }
    }

    /// Position of a consumer that has processed `consumed` out of `loaded`
    /// rows.
    pub fn from_consumed(consumed: usize, loaded: usize) -> Self {
        Self {
            offset: consumed as f64,
            viewport_extent: 0.0,
            content_extent: loaded as f64,
        }
    }

    /// Distance from the bottom edge of the viewport to the end of content.
    pub fn remaining(&self) -> f64 {
        (self.content_extent - (self.offset + self.viewport_extent)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_is_clamped_at_zero() {
        assert_eq!(ScrollPosition::new(900.0, 200.0, 1000.0).remaining(), 0.0);
        assert_eq!(ScrollPosition::new(100.0, 200.0, 1000.0).remaining(), 700.0);
    }

    #[test]
    fn consumed_rows_map_to_remaining_rows() {
        assert_eq!(ScrollPosition::from_consumed(15, 20).remaining(), 5.0);
    }
}
