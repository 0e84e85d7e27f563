pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod state;

pub use catalog::Catalog;
pub use config::{Settings, SettingsStore};
pub use engine::Engine;
pub use error::{Result, SelectorError};
pub use io::SelectorPaths;
