use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// State directory holding the saved session and statistics files.
    pub fn state_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("state")
                    .join("thordle"),
            )
        } else {
            ProjectDirs::from("", "", "thordle")
                .map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf())
        }
    }
}
