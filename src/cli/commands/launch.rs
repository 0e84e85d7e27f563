use super::{load_configured_settings, CommandHandler};
use crate::io::{launch_imaris, SelectorPaths};
use crate::Result;
use tracing::info;

/// Handler for the `launch` command
pub struct LaunchCommand {
    pub paths: SelectorPaths,
}

impl CommandHandler for LaunchCommand {
    fn execute(&self) -> Result<()> {
        let settings = load_configured_settings(&self.paths)?;
        let child = launch_imaris(&settings.imaris_path)?;
        info!("Started Imaris (pid {})", child.id());
        println!("Started {}", settings.imaris_path);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "launch"
    }
}

impl LaunchCommand {
    pub fn new(paths: SelectorPaths) -> Self {
        Self { paths }
    }
}
