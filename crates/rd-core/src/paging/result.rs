use serde::{Deserialize, Serialize};

/// One page returned by a page source.
///
/// `total_count` is `None` when the source cannot cheaply count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: Option<usize>,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            total_count: None,
        }
    }

    pub fn with_total(items: Vec<T>, total_count: usize) -> Self {
        Self {
            items,
            total_count: Some(total_count),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
