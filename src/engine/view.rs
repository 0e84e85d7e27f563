use super::{BatchOutcome, Engine};
use serde::Serialize;

/// Aggregation level the selector lists and edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    #[value(name = "product")]
    ByProduct,
    #[value(name = "module")]
    ByModule,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::ByProduct => write!(f, "product"),
            ViewMode::ByModule => write!(f, "module"),
        }
    }
}

/// One checkable line of the selector list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// Product name or module id
    pub name: String,
    pub enabled: bool,
}

/// Heading and body of the description pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub title: String,
    pub text: String,
}

impl Engine {
    /// Entries the user can toggle in the given view
    ///
    /// Products are the installed, administrator-visible ones; modules are
    /// the installed modules of those products.
    pub fn entries(&self, mode: ViewMode) -> Vec<ListEntry> {
        match mode {
            ViewMode::ByProduct => self
                .installed_and_admin_visible_products()
                .into_iter()
                .map(|name| ListEntry {
                    enabled: self.is_product_enabled(&name),
                    name,
                })
                .collect(),
            ViewMode::ByModule => {
                let installed = self.installed_module_ids();
                self.filtered_module_names()
                    .into_iter()
                    .filter(|id| installed.contains(id))
                    .map(|id| ListEntry {
                        enabled: self.is_module_enabled(&id),
                        name: id,
                    })
                    .collect()
            }
        }
    }

    /// Apply a check/uncheck of one list entry
    pub fn set_entry(&mut self, mode: ViewMode, name: &str, enabled: bool) -> BatchOutcome {
        match (mode, enabled) {
            (ViewMode::ByProduct, true) => self.enable_products([name]),
            (ViewMode::ByProduct, false) => self.disable_products([name]),
            (ViewMode::ByModule, true) => self.enable_modules([name]),
            (ViewMode::ByModule, false) => self.disable_modules([name]),
        }
    }

    /// Description pane content for a list entry
    ///
    /// Products show their own description; modules show their owning
    /// product and the module description. Misses read "Unknown module.".
    pub fn describe(&self, mode: ViewMode, name: &str) -> Description {
        let catalog = self.catalog();
        match mode {
            ViewMode::ByProduct => Description {
                title: name.to_string(),
                text: catalog.product_description(name).to_string(),
            },
            ViewMode::ByModule => Description {
                title: catalog.product_of(name).to_string(),
                text: catalog.module_description(name).to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, UNKNOWN};
    use crate::config::Settings;
    use crate::state::{LicenseStore, MemoryBackend, Namespace};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn engine() -> Engine {
        let namespace = Namespace::new("tester", "Imaris 7.6");
        let backend = MemoryBackend::new()
            .with_flag(&namespace, "ImarisBase", true)
            .with_flag(&namespace, "ImarisStatistics", false)
            .with_flag(&namespace, "ImarisMeasurementPoint", true)
            .with_flag(&namespace, "ImarisTrack", false);

        let mut settings = Settings::new();
        settings.set_product_visible("Imaris Measurement Pro", true);
        settings.set_product_visible("Imaris Track", true);
        settings.set_product_visible("Imaris", true);

        Engine::attach(
            Arc::new(Catalog::imaris()),
            LicenseStore::new(backend, namespace),
            settings,
        )
    }

    #[test]
    fn test_product_entries() {
        let engine = engine();
        assert_eq!(
            engine.entries(ViewMode::ByProduct),
            vec![
                ListEntry { name: "Imaris Measurement Pro".to_string(), enabled: true },
                ListEntry { name: "Imaris Track".to_string(), enabled: false },
            ]
        );
    }

    #[test]
    fn test_module_entries_skip_uninstalled_modules() {
        let engine = engine();
        let names: Vec<String> = engine
            .entries(ViewMode::ByModule)
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(
            names,
            vec!["ImarisMeasurementPoint", "ImarisStatistics", "ImarisTrack"]
        );
    }

    #[test]
    fn test_set_entry_broadcasts_in_product_view() {
        let mut engine = engine();

        let outcome = engine.set_entry(ViewMode::ByProduct, "Imaris Measurement Pro", true);
        assert_eq!(outcome.applied.len(), 3);
        assert!(engine.is_module_enabled("ImarisStatistics"));

        engine.set_entry(ViewMode::ByModule, "ImarisStatistics", false);
        assert!(!engine.is_module_enabled("ImarisStatistics"));
        assert!(engine.is_product_enabled("Imaris Measurement Pro"));
    }

    #[test]
    fn test_describe() {
        let engine = engine();
        assert_eq!(
            engine.describe(ViewMode::ByProduct, "Imaris Track"),
            Description {
                title: "Imaris Track".to_string(),
                text: "Discover the Meaning of Motion.".to_string(),
            }
        );
        assert_eq!(
            engine.describe(ViewMode::ByModule, "ImarisReaderZeiss").title,
            "File Reader"
        );
        assert_eq!(engine.describe(ViewMode::ByModule, "Nope").title, UNKNOWN);
    }
}
