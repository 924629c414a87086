use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    #[error("invalid page window: end index {end} is before start index {start}")]
    InvertedWindow { start: usize, end: usize },
}

/// Inclusive, zero-based index window requested from a page source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    start_index: usize,
    end_index: usize,
}

impl PageRequest {
    pub fn new(start_index: usize, end_index: usize) -> Result<Self, PageRequestError> {
        if end_index < start_index {
            return Err(PageRequestError::InvertedWindow {
                start: start_index,
                end: end_index,
            });
        }
        Ok(Self {
            start_index,
            end_index,
        })
    }

    /// Window covering page `page_index` of `page_size` items.
    pub fn for_page(page_index: usize, page_size: NonZeroUsize) -> Self {
        let size = page_size.get();
        let start_index = page_index.saturating_mul(size);
        Self {
            start_index,
            end_index: start_index.saturating_add(size - 1),
        }
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// Number of indices in the window; never zero.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(limit, offset)` pair for stores that speak offset pagination.
    pub fn as_limit_offset(&self) -> (usize, usize) {
        (self.len(), self.start_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn for_page_computes_inclusive_window() {
        let first = PageRequest::for_page(0, size(20));
        assert_eq!((first.start_index(), first.end_index()), (0, 19));

        let third = PageRequest::for_page(2, size(20));
        assert_eq!((third.start_index(), third.end_index()), (40, 59));
        assert_eq!(third.len(), 20);
    }

    #[test]
    fn single_item_window_has_length_one() {
        let req = PageRequest::new(7, 7).unwrap();
        assert_eq!(req.len(), 1);
        assert_eq!(req.as_limit_offset(), (1, 7));
    }

    #[test]
    fn inverted_window_is_rejected() {
        assert_eq!(
            PageRequest::new(10, 9),
            Err(PageRequestError::InvertedWindow { start: 10, end: 9 })
        );
    }

    #[test]
    fn huge_page_index_saturates_instead_of_overflowing() {
        let req = PageRequest::for_page(usize::MAX, size(20));
        assert_eq!(req.start_index(), usize::MAX);
        assert_eq!(req.end_index(), usize::MAX);
    }
}
