//! Storage backends for license flags
//!
//! A backend only deals in raw string values. Interpreting them as booleans is
//! the job of [`super::LicenseStore`].

use super::types::Namespace;
use crate::{Result, SelectorError};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Raw access to a namespaced per-user key-value resource
pub trait LicenseBackend {
    /// Names of all values in the namespace
    fn value_names(&self, namespace: &Namespace) -> Result<Vec<String>>;

    /// Raw value, `None` when the name is absent
    fn read_value(&self, namespace: &Namespace, name: &str) -> Result<Option<String>>;

    /// Write a raw value; the namespace itself must already exist
    fn write_value(&mut self, namespace: &Namespace, name: &str, value: &str) -> Result<()>;
}

/// Filesystem rendition of the registry: one directory per namespace and one
/// file per value, holding the raw value text
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory backing a namespace
    pub fn namespace_dir(&self, namespace: &Namespace) -> PathBuf {
        self.root.join(namespace.relative_path())
    }

    fn value_path(&self, namespace: &Namespace, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(SelectorError::Store(format!("Invalid value name '{}'", name)));
        }
        Ok(self.namespace_dir(namespace).join(name))
    }
}

impl LicenseBackend for FileBackend {
    fn value_names(&self, namespace: &Namespace) -> Result<Vec<String>> {
        let dir = self.namespace_dir(namespace);
        let mut names = Vec::new();

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    fn read_value(&self, namespace: &Namespace, name: &str) -> Result<Option<String>> {
        let path = self.value_path(namespace, name)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_value(&mut self, namespace: &Namespace, name: &str, value: &str) -> Result<()> {
        let dir = self.namespace_dir(namespace);
        if !dir.is_dir() {
            return Err(SelectorError::Store(format!(
                "Namespace {} does not exist",
                namespace
            )));
        }

        let path = self.value_path(namespace, name)?;
        fs::write(path, value)?;
        Ok(())
    }
}

/// In-process backend, for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    namespaces: HashMap<Namespace, BTreeMap<String, String>>,
    read_only: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty namespace
    pub fn with_namespace(mut self, namespace: &Namespace) -> Self {
        self.namespaces.entry(namespace.clone()).or_default();
        self
    }

    /// Store a raw value, creating the namespace if needed
    pub fn with_value(mut self, namespace: &Namespace, name: &str, value: &str) -> Self {
        self.namespaces
            .entry(namespace.clone())
            .or_default()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Store a flag with the regular encoding
    pub fn with_flag(self, namespace: &Namespace, name: &str, enabled: bool) -> Self {
        self.with_value(namespace, name, super::types::encode_flag(enabled))
    }

    /// Refuse every write, like a namespace that cannot be opened writable
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    fn namespace(&self, namespace: &Namespace) -> Result<&BTreeMap<String, String>> {
        self.namespaces
            .get(namespace)
            .ok_or_else(|| SelectorError::Store(format!("Namespace {} does not exist", namespace)))
    }
}

impl LicenseBackend for MemoryBackend {
    fn value_names(&self, namespace: &Namespace) -> Result<Vec<String>> {
        Ok(self.namespace(namespace)?.keys().cloned().collect())
    }

    fn read_value(&self, namespace: &Namespace, name: &str) -> Result<Option<String>> {
        Ok(self.namespace(namespace)?.get(name).cloned())
    }

    fn write_value(&mut self, namespace: &Namespace, name: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(SelectorError::Store(format!(
                "Namespace {} is read-only",
                namespace
            )));
        }

        let values = self.namespaces.get_mut(namespace).ok_or_else(|| {
            SelectorError::Store(format!("Namespace {} does not exist", namespace))
        })?;
        values.insert(name.to_string(), value.to_string());
        Ok(())
    }
}
