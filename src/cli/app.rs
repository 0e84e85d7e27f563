use crate::engine::ViewMode;
use clap::{Parser, Subcommand, ValueEnum};

/// ImarisSelector: choose which licensed Imaris modules to use
#[derive(Parser)]
#[command(name = "imaris-selector")]
#[command(version)]
#[command(about = "Choose which licensed Imaris products and modules to check out")]
#[command(
    long_about = "ImarisSelector resets the per-user Imaris license flags at the start of a session, lets the user switch on the products the administrator made available, and starts Imaris."
)]
pub struct Cli {
    /// Log level for diagnostics on stderr
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a selection session: reset the flags and list what can be enabled
    Start {
        /// List products or individual modules
        #[arg(long, value_enum, default_value = "product")]
        by: ViewMode,

        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the available products or modules and their state
    List {
        /// List products or individual modules
        #[arg(long, value_enum, default_value = "product")]
        by: ViewMode,

        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Enable products or modules
    Enable {
        /// Product names or module ids
        #[arg(required = true)]
        names: Vec<String>,

        /// Treat names as products or as modules
        #[arg(long, value_enum, default_value = "product")]
        by: ViewMode,
    },

    /// Disable products or modules
    Disable {
        /// Product names or module ids
        #[arg(required = true)]
        names: Vec<String>,

        /// Treat names as products or as modules
        #[arg(long, value_enum, default_value = "product")]
        by: ViewMode,
    },

    /// Show the description of a product or module
    Describe {
        /// Product name or module id
        name: String,

        /// Treat the name as a product or as a module
        #[arg(long, value_enum, default_value = "product")]
        by: ViewMode,
    },

    /// Start Imaris with the current selection
    Launch,

    /// Export the installed module ids to a text file
    Export {
        /// Destination file
        output: String,
    },

    /// Administrator configuration
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Show the current settings
    Show {
        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write fresh settings for an Imaris installation, all products visible
    Init {
        /// Path to Imaris.exe
        imaris_path: String,

        /// Version string, when it cannot be derived from the path
        #[arg(long)]
        version: Option<String>,

        /// Products to hide from users
        #[arg(long, value_delimiter = ',')]
        hide: Vec<String>,
    },

    /// Point the selector at another Imaris executable
    SetPath {
        /// Path to Imaris.exe
        imaris_path: String,

        /// Version string, when it cannot be derived from the path
        #[arg(long)]
        version: Option<String>,
    },

    /// Make products visible to users
    ShowProduct {
        #[arg(required = true)]
        products: Vec<String>,
    },

    /// Hide products from users
    HideProduct {
        #[arg(required = true)]
        products: Vec<String>,
    },
}
