use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "slom").map(|pd| pd.config_dir().join("config.json"))
    }

    /// The TUI owns stdout, so logs go to a file under the state dir.
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("slom");
            Some(state_dir.join("slom.log"))
        } else {
            ProjectDirs::from("", "", "slom")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("slom.log"))
        }
    }
}
