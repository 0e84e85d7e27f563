use super::{load_configured_settings, open_engine, print_entries, CommandHandler};
use crate::cli::OutputFormat;
use crate::engine::{ListEntry, ViewMode};
use crate::io::{launch_imaris, SelectorPaths};
use crate::Result;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct Listing<'a> {
    view: ViewMode,
    license_information_found: bool,
    entries: &'a [ListEntry],
}

/// Handler for the `start` and `list` commands
pub struct ListCommand {
    pub paths: SelectorPaths,
    pub by: ViewMode,
    pub format: OutputFormat,
    /// Apply the session startup policy first
    pub reset: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_configured_settings(&self.paths)?;
        let engine = open_engine(&self.paths, settings, self.reset);

        if self.reset && !engine.license_information_found() {
            // Imaris has not written its license flags for this user yet;
            // run it once so the next session has something to select.
            info!("No license information found, starting Imaris directly");
            println!("No license information found. Starting Imaris to create it.");
            launch_imaris(&engine.settings().imaris_path)?;
            return Ok(());
        }

        let entries = engine.entries(self.by);
        match self.format {
            OutputFormat::Json => {
                let listing = Listing {
                    view: self.by,
                    license_information_found: engine.license_information_found(),
                    entries: &entries,
                };
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
            OutputFormat::Text => print_entries(&engine, self.by, &entries),
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        if self.reset {
            "start"
        } else {
            "list"
        }
    }
}

impl ListCommand {
    pub fn new(paths: SelectorPaths, by: ViewMode, format: OutputFormat, reset: bool) -> Self {
        Self {
            paths,
            by,
            format,
            reset,
        }
    }
}
