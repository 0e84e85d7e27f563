pub mod app;
pub mod commands;

pub use app::{AdminCommands, Cli, Commands, LogLevel, OutputFormat};
