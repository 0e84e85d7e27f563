//! Per-user license flag storage
//!
//! Imaris keeps one `"true"`/`"false"` value per installed module under a
//! user and version scoped namespace. [`LicenseStore`] turns that into a
//! boolean API; [`LicenseBackend`] implementations hold the raw values.

pub mod backend;
pub mod store;
pub mod types;

pub use backend::{FileBackend, LicenseBackend, MemoryBackend};
pub use store::{LicenseStore, HIDDEN_MODULE_IDS};
pub use types::{current_user, Namespace};
