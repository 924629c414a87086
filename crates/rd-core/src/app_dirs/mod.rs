use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Where ReferralDesk keeps its per-user files on this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
}

impl AppDirs {
    /// Config file picked up when no `--config` is given.
    pub fn default_config_file(&self) -> PathBuf {
        self.app_data_root.join(CONFIG_FILE_NAME)
    }
}
