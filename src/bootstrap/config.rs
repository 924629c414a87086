//! # Configuration Loader
//!
//! Reads a TOML file into the `AppConfig` DTO. Pure data loading: no
//! validation and no defaults. Missing keys stay empty and are resolved by
//! [`crate::bootstrap::wiring`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use rd_core::config::AppConfig;
use rd_core::ports::AppDirsPort;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Chooses the configuration for this process.
///
/// An explicit path must load. Otherwise `config.toml` under the app data
/// root is used when present. Paths left empty either way point into the
/// app data root.
pub fn resolve_config(
    explicit: Option<PathBuf>,
    app_dirs: &dyn AppDirsPort,
) -> anyhow::Result<AppConfig> {
    let dirs = app_dirs.get_app_dirs()?;
    let default_path = dirs.default_config_file();
    let mut config = match explicit {
        Some(path) => load_config(&path)?,
        None if default_path.exists() => load_config(&default_path)?,
        None => AppConfig::empty(),
    };

    let layout = AppConfig::with_system_defaults(dirs.app_data_root);
    if config.sources_path.as_os_str().is_empty() {
        config.sources_path = layout.sources_path;
    }
    if config.state_path.as_os_str().is_empty() {
        config.state_path = layout.state_path;
    }
    if config.log_dir.as_os_str().is_empty() {
        config.log_dir = layout.log_dir;
    }
    Ok(config)
}
