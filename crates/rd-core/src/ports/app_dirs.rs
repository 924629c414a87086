use crate::app_dirs::AppDirs;
use crate::ports::errors::AppDirsError;

/// Resolves the per-user data directory. Adapters decide the platform
/// layout; callers only see the resulting [`AppDirs`].
pub trait AppDirsPort: Send + Sync {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError>;
}
