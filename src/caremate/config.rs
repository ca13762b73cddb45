use crate::error::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "CAREMATE_CONFIG_DIR";

/// User settings, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CareMateConfig {
    /// Where HTML downloads are written. Falls back to the user's download folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,

    /// Group listings by category even without `--group`
    #[serde(default)]
    pub group_by_category: bool,

    /// Copy every text export to the clipboard without `--copy`
    #[serde(default)]
    pub copy_on_export: bool,
}

impl CareMateConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Directory downloads go to: the configured one, the user's download folder, or
    /// the current directory as a last resort.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(|| {
                UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// `$CAREMATE_CONFIG_DIR` if set, otherwise the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "zenaris", "caremate").map(|dirs| dirs.config_dir().to_path_buf())
}
