use super::backend::LicenseBackend;
use super::types::{decode_flag, encode_flag, Namespace};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Ids Imaris still writes but that no longer correspond to a module
pub const HIDDEN_MODULE_IDS: &[&str] = &["ImarisAnalyzer"];

/// Boolean view of the license flags of one user and one Imaris version
///
/// Every failure degrades to "disabled" or a `false` return value; nothing
/// here propagates an error to the caller.
pub struct LicenseStore {
    backend: Box<dyn LicenseBackend>,
    namespace: Namespace,
}

impl LicenseStore {
    pub fn new(backend: impl LicenseBackend + 'static, namespace: Namespace) -> Self {
        Self {
            backend: Box::new(backend),
            namespace,
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Ids of all modules with a flag in the namespace
    pub fn installed_module_ids(&self) -> BTreeSet<String> {
        match self.backend.value_names(&self.namespace) {
            Ok(names) => names
                .into_iter()
                .filter(|name| !HIDDEN_MODULE_IDS.contains(&name.as_str()))
                .collect(),
            Err(e) => {
                debug!("No license namespace {}: {}", self.namespace, e);
                BTreeSet::new()
            }
        }
    }

    /// Current flag; absent, malformed or unreadable values count as disabled
    pub fn is_enabled(&self, id: &str) -> bool {
        match self.backend.read_value(&self.namespace, id) {
            Ok(Some(raw)) => decode_flag(&raw).unwrap_or_else(|| {
                warn!("Malformed license flag {}={:?} in {}", id, raw, self.namespace);
                false
            }),
            Ok(None) => false,
            Err(e) => {
                warn!("Could not read license flag {} in {}: {}", id, self.namespace, e);
                false
            }
        }
    }

    /// Write a flag, returning whether the write succeeded
    pub fn set_enabled(&mut self, id: &str, enabled: bool) -> bool {
        match self
            .backend
            .write_value(&self.namespace, id, encode_flag(enabled))
        {
            Ok(()) => {
                debug!("Set {}={} in {}", id, enabled, self.namespace);
                true
            }
            Err(e) => {
                warn!("Could not write license flag {} in {}: {}", id, self.namespace, e);
                false
            }
        }
    }
}

impl std::fmt::Debug for LicenseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseStore")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}
