//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation
//!
//! Missing keys map to "empty" values. Deciding what an empty value means
//! (for example falling back to the default page size) is the caller's job.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Seed file of referral sources (JSON array)
    pub sources_path: PathBuf,

    /// Persisted app state document
    pub state_path: PathBuf,

    /// Directory for rolling log files
    pub log_dir: PathBuf,

    /// List page size (0 when not configured)
    pub page_size: usize,

    /// Distance from the end of the list that triggers the next page
    pub scroll_threshold: f64,

    /// Minimum time between two scroll-triggered loads
    pub scroll_min_interval_ms: i64,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let path = |section: &str, key: &str| {
            PathBuf::from(
                toml_value
                    .get(section)
                    .and_then(|s| s.get(key))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            )
        };
        let list = toml_value.get("list");

        Ok(Self {
            sources_path: path("data", "sources_path"),
            state_path: path("storage", "state_path"),
            log_dir: path("logging", "log_dir"),
            page_size: list
                .and_then(|l| l.get("page_size"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as usize,
            scroll_threshold: list
                .and_then(|l| l.get("scroll_threshold"))
                .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
                .unwrap_or(0.0),
            scroll_min_interval_ms: list
                .and_then(|l| l.get("scroll_min_interval_ms"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            sources_path: PathBuf::new(),
            state_path: PathBuf::new(),
            log_dir: PathBuf::new(),
            page_size: 0,
            scroll_threshold: 0.0,
            scroll_min_interval_ms: 0,
        }
    }

    /// Create AppConfig with paths rooted at `data_dir`
    ///
    /// The base directory should be computed by the caller using
    /// platform-specific logic (e.g., `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            sources_path: data_dir.join("referral_sources.json"),
            state_path: data_dir.join("app_state.json"),
            log_dir: data_dir.join("logs"),
            ..Self::empty()
        }
    }
}
