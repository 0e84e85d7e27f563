use super::{load_configured_settings, open_engine, CommandHandler};
use crate::engine::{BatchOutcome, ViewMode};
use crate::io::SelectorPaths;
use crate::{Result, SelectorError};

/// Handler for the `enable` and `disable` commands
pub struct ToggleCommand {
    pub paths: SelectorPaths,
    pub names: Vec<String>,
    pub by: ViewMode,
    pub enabled: bool,
}

impl CommandHandler for ToggleCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_configured_settings(&self.paths)?;
        let mut engine = open_engine(&self.paths, settings, false);

        // Only entries the list offers may be toggled
        let offered: Vec<String> = engine
            .entries(self.by)
            .into_iter()
            .map(|entry| entry.name)
            .collect();

        let mut outcome = BatchOutcome::default();
        let mut unavailable = Vec::new();
        for name in &self.names {
            if !offered.contains(name) {
                unavailable.push(name.as_str());
                continue;
            }
            let result = engine.set_entry(self.by, name, self.enabled);
            outcome.applied.extend(result.applied);
            outcome.failed.extend(result.failed);
        }

        let verb = if self.enabled { "Enabled" } else { "Disabled" };
        for name in &self.names {
            if !unavailable.contains(&name.as_str()) {
                println!("{} {}", verb, name);
            }
        }

        if !unavailable.is_empty() {
            return Err(SelectorError::Cli(format!(
                "Not available for selection ({} view): {}",
                self.by,
                unavailable.join(", ")
            )));
        }
        if !outcome.is_complete() {
            return Err(SelectorError::Store(format!(
                "Could not write license flags for: {}",
                outcome.failed.join(", ")
            )));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        if self.enabled {
            "enable"
        } else {
            "disable"
        }
    }
}

impl ToggleCommand {
    pub fn new(paths: SelectorPaths, names: Vec<String>, by: ViewMode, enabled: bool) -> Self {
        Self {
            paths,
            names,
            by,
            enabled,
        }
    }
}
