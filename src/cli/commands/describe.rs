use super::CommandHandler;
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::engine::{Engine, ViewMode};
use crate::state::{LicenseStore, MemoryBackend, Namespace};
use crate::Result;
use std::sync::Arc;

/// Handler for the `describe` command
///
/// Descriptions come from the catalog alone, so no settings or license
/// flags are needed.
pub struct DescribeCommand {
    pub name: String,
    pub by: ViewMode,
}

impl CommandHandler for DescribeCommand {
    fn execute(&self) -> Result<()> {
        let engine = Engine::attach(
            Arc::new(Catalog::imaris()),
            LicenseStore::new(MemoryBackend::new().read_only(), Namespace::for_current_user("")),
            Settings::new(),
        );

        let description = engine.describe(self.by, &self.name);
        println!("{}", description.title);
        println!();
        println!("{}", description.text);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "describe"
    }
}

impl DescribeCommand {
    pub fn new(name: String, by: ViewMode) -> Self {
        Self { name, by }
    }
}
