use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("License store error: {0}")]
    Store(String),

    #[error("Imaris could not be started: {0}")]
    Launch(String),

    #[error("CLI error: {0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, SelectorError>;
