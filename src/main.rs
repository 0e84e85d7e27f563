use anyhow::{Context, Result};
use clap::Parser;
use imaris_selector::{
    cli::commands::{
        admin::AdminCommand, describe::DescribeCommand, export::ExportCommand,
        launch::LaunchCommand, list::ListCommand, toggle::ToggleCommand, CommandHandler,
    },
    cli::{Cli, Commands, LogLevel},
    SelectorPaths,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing; diagnostics go to stderr so stdout stays parseable
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let paths = SelectorPaths::new().context("Failed to resolve selector directories")?;
    debug!(
        "Settings at {}, license store at {}",
        paths.settings_file().display(),
        paths.store_root.display()
    );

    let handler: Box<dyn CommandHandler> = match cli.command {
        Commands::Start { by, format } => Box::new(ListCommand::new(paths, by, format, true)),
        Commands::List { by, format } => Box::new(ListCommand::new(paths, by, format, false)),
        Commands::Enable { names, by } => Box::new(ToggleCommand::new(paths, names, by, true)),
        Commands::Disable { names, by } => Box::new(ToggleCommand::new(paths, names, by, false)),
        Commands::Describe { name, by } => Box::new(DescribeCommand::new(name, by)),
        Commands::Launch => Box::new(LaunchCommand::new(paths)),
        Commands::Export { output } => Box::new(ExportCommand::new(paths, output)),
        Commands::Admin { command } => Box::new(AdminCommand::new(paths, command)),
    };

    debug!("Running {} command", handler.name());
    handler
        .execute()
        .with_context(|| format!("{} failed", handler.name()))?;
    Ok(())
}
