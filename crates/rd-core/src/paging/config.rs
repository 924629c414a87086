use std::num::NonZeroUsize;

use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderConfigError {
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}

/// Construction-time settings of an incremental loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    page_size: NonZeroUsize,
    initial_page_index: usize,
    eager: bool,
}

impl LoaderConfig {
    pub fn new(page_size: usize) -> Result<Self, LoaderConfigError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(LoaderConfigError::ZeroPageSize)?;
        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    pub fn with_initial_page_index(mut self, initial_page_index: usize) -> Self {
        self.initial_page_index = initial_page_index;
        self
    }

    /// Opt out of the first-page load on mount.
    pub fn lazy(mut self) -> Self {
        self.eager = false;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn page_size_nonzero(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn initial_page_index(&self) -> usize {
        self.initial_page_index
    }

    pub fn is_eager(&self) -> bool {
        self.eager
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
            initial_page_index: 0,
            eager: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_list_view_expectations() {
        let config = LoaderConfig::default();
        assert_eq!(config.page_size(), 20);
        assert_eq!(config.initial_page_index(), 0);
        assert!(config.is_eager());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(LoaderConfig::new(0), Err(LoaderConfigError::ZeroPageSize));
    }

    #[test]
    fn builder_methods_override_fields() {
        let config = LoaderConfig::new(5).unwrap().with_initial_page_index(3).lazy();
        assert_eq!(config.page_size(), 5);
        assert_eq!(config.initial_page_index(), 3);
        assert!(!config.is_eager());
    }
}
