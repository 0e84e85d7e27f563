use super::types::Settings;
use crate::io::paths::SelectorPaths;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// First line written to every settings file
pub const FILE_VERSION_LINE: &str = "FileVersion=ImarisSelector Settings File version 1";

/// Headers accepted on read; the admin tool has always written the first one
const ACCEPTED_FILE_VERSION_LINES: &[&str] = &[
    FILE_VERSION_LINE,
    "FileVersion=ImarisSelector Settings File version 1.0.0",
];

const IMARIS_VERSION_KEY: &str = "ImarisVersion";
const IMARIS_PATH_KEY: &str = "ImarisPath";

/// Reads and writes the administrator settings file
///
/// Missing, unreadable or foreign files read as fresh, invalid settings.
/// Writes report success as a boolean.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit settings file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the standard location
    pub fn from_paths(paths: &SelectorPaths) -> Self {
        Self::new(paths.settings_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Settings {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_settings(&content),
            Err(e) => {
                debug!("No settings at {}: {}", self.path.display(), e);
                Settings::new()
            }
        }
    }

    pub fn write(&self, settings: &Settings) -> bool {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create settings directory {}: {}", parent.display(), e);
                return false;
            }
        }

        match fs::write(&self.path, render_settings(settings)) {
            Ok(()) => {
                debug!("Wrote settings to {}", self.path.display());
                true
            }
            Err(e) => {
                warn!("Failed to write settings to {}: {}", self.path.display(), e);
                false
            }
        }
    }
}

/// Parse settings file content
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::new();
    let mut lines = content.lines().map(|line| line.trim_end_matches('\r'));

    match lines.next() {
        Some(header) if ACCEPTED_FILE_VERSION_LINES.contains(&header) => {}
        other => {
            warn!("Unsupported settings file header: {:?}", other);
            return settings;
        }
    }

    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            warn!("Skipping malformed settings line {}: {:?}", index + 2, line);
            continue;
        };

        match key {
            "" | "FileVersion" => {
                warn!("Skipping settings line {}: {:?}", index + 2, line);
            }
            IMARIS_VERSION_KEY => settings.imaris_version = value.to_string(),
            IMARIS_PATH_KEY => settings.imaris_path = value.to_string(),
            product => match value {
                "true" => settings.set_product_visible(product, true),
                "false" => settings.set_product_visible(product, false),
                _ => warn!(
                    "Skipping product {:?} with invalid state {:?}",
                    product, value
                ),
            },
        }
    }

    settings
}

/// Render settings in file form: header, version, path, then products
pub fn render_settings(settings: &Settings) -> String {
    let mut out = String::new();
    out.push_str(FILE_VERSION_LINE);
    out.push('\n');
    out.push_str(&format!("{}={}\n", IMARIS_VERSION_KEY, settings.imaris_version));
    out.push_str(&format!("{}={}\n", IMARIS_PATH_KEY, settings.imaris_path));
    for (product, visible) in &settings.products_with_enabled_state {
        out.push_str(&format!("{}={}\n", product, visible));
    }
    out
}
