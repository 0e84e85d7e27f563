use super::{load_configured_settings, open_engine, CommandHandler};
use crate::io::{export_module_list, SelectorPaths};
use crate::Result;
use std::path::PathBuf;

/// Handler for the `export` command
pub struct ExportCommand {
    pub paths: SelectorPaths,
    pub output: PathBuf,
}

impl CommandHandler for ExportCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_configured_settings(&self.paths)?;
        let engine = open_engine(&self.paths, settings, false);

        let count = export_module_list(&self.output, engine.installed_module_ids())?;
        println!("{} modules exported to {}", count, self.output.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "export"
    }
}

impl ExportCommand {
    pub fn new(paths: SelectorPaths, output: impl Into<PathBuf>) -> Self {
        Self {
            paths,
            output: output.into(),
        }
    }
}
