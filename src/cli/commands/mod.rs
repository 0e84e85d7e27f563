pub mod admin;
pub mod describe;
pub mod export;
pub mod launch;
pub mod list;
pub mod toggle;

use crate::catalog::Catalog;
use crate::config::{Settings, SettingsStore};
use crate::engine::{Engine, ListEntry, ViewMode};
use crate::io::SelectorPaths;
use crate::state::{FileBackend, LicenseStore, Namespace};
use crate::{Result, SelectorError};
use std::sync::Arc;
use tracing::debug;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Read the administrator settings, refusing to run without them
pub(crate) fn load_configured_settings(paths: &SelectorPaths) -> Result<Settings> {
    let store = SettingsStore::from_paths(paths);
    let settings = store.read();
    if !settings.is_valid() {
        return Err(SelectorError::Config(format!(
            "ImarisSelector was not configured on this machine ({}). Please contact your administrator.",
            store.path().display()
        )));
    }
    Ok(settings)
}

/// Build an engine over the current user's license namespace
///
/// With `reset` the session startup policy is applied.
pub(crate) fn open_engine(paths: &SelectorPaths, settings: Settings, reset: bool) -> Engine {
    let namespace = Namespace::for_current_user(settings.imaris_version.clone());
    debug!("Opening license namespace {}", namespace);
    let store = LicenseStore::new(FileBackend::new(&paths.store_root), namespace);
    let catalog = Arc::new(Catalog::imaris());

    if reset {
        Engine::new(catalog, store, settings)
    } else {
        Engine::attach(catalog, store, settings)
    }
}

/// Print list entries as a checkbox table with descriptions
pub(crate) fn print_entries(engine: &Engine, mode: ViewMode, entries: &[ListEntry]) {
    if entries.is_empty() {
        match mode {
            ViewMode::ByProduct => println!("No products available."),
            ViewMode::ByModule => println!("No modules available."),
        }
        return;
    }

    let name_width = entries
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(4)
        .max(4); // "NAME"

    println!("    {:<name_width$}  DESCRIPTION", "NAME", name_width = name_width);
    for entry in entries {
        let description = engine.describe(mode, &entry.name);
        println!(
            "[{}] {:<name_width$}  {}",
            if entry.enabled { "x" } else { " " },
            entry.name,
            description.text,
            name_width = name_width
        );
    }
}
