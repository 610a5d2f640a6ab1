use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;

pub const DEFAULT_FRAME_MS: u64 = 16;

/// Presentation preferences. Game rules are fixed and do not live here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Skip the wheel rotation and particle bursts.
    pub reduced_motion: bool,
    /// Ring the terminal bell on countdown ticks.
    pub sound: bool,
    /// Flash the border where a phone would vibrate.
    pub haptics: bool,
    /// Redraw interval; the cursor speed does not depend on it.
    pub frame_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            sound: true,
            haptics: true,
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("slom_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(mut cfg) => {
                // A zero interval would spin the event loop
                cfg.frame_ms = cfg.frame_ms.max(1);
                cfg
            }
            Err(e) => {
                warn!("config: ignoring {}: {e}", self.path.display());
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
