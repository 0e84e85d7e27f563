use crate::{Result, SelectorError};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Folder name used below the shared configuration directory
pub const APP_NAME: &str = "ImarisSelector";

/// Settings file name inside [`SelectorPaths::config_dir`]
pub const SETTINGS_FILE: &str = "settings.conf";

/// Overrides the per-machine shared configuration directory
pub const CONFIG_DIR_ENV: &str = "IMARIS_SELECTOR_CONFIG_DIR";

/// Overrides the root of the license flag store
pub const STORE_DIR_ENV: &str = "IMARIS_SELECTOR_STORE_DIR";

/// Path management for the selector
#[derive(Debug, Clone)]
pub struct SelectorPaths {
    /// Shared administrator configuration (`<shared>/ImarisSelector/`)
    pub config_dir: PathBuf,
    /// Root below which license namespaces live
    pub store_root: PathBuf,
}

impl SelectorPaths {
    /// Standard locations, honouring the environment overrides
    pub fn new() -> Result<Self> {
        let shared = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => shared_config_dir(),
        };

        let store_root = match std::env::var_os(STORE_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => {
                let dirs = BaseDirs::new().ok_or_else(|| {
                    SelectorError::Path("Failed to determine user directories".to_string())
                })?;
                dirs.data_local_dir().join(APP_NAME).join("users")
            }
        };

        Ok(Self {
            config_dir: shared.join(APP_NAME),
            store_root,
        })
    }

    /// Keep everything below one directory
    pub fn for_root(root: &Path) -> Self {
        Self {
            config_dir: root.join(APP_NAME),
            store_root: root.join("users"),
        }
    }

    /// Administrator settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }
}

/// Per-machine directory readable by every user
#[cfg(windows)]
fn shared_config_dir() -> PathBuf {
    std::env::var_os("PROGRAMDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"))
}

#[cfg(target_os = "macos")]
fn shared_config_dir() -> PathBuf {
    PathBuf::from("/Library/Application Support")
}

#[cfg(not(any(windows, target_os = "macos")))]
fn shared_config_dir() -> PathBuf {
    PathBuf::from("/etc")
}
