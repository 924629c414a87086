use std::path::PathBuf;

use rd_core::app_dirs::AppDirs;

/// Concrete file locations under the app data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub sources_path: PathBuf,
    pub state_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            sources_path: dirs.app_data_root.join("referral_sources.json"),
            state_path: dirs.app_data_root.join("app_state.json"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
