pub mod loader;
pub mod types;
pub mod version;

pub use loader::{SettingsStore, FILE_VERSION_LINE};
pub use types::Settings;
pub use version::version_from_executable_path;
