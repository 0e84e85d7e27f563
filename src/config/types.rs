use crate::{Result, SelectorError};
use serde::Serialize;
use std::collections::BTreeMap;

/// Administrator configuration of the selector
///
/// Product names are matched against the catalog by exact string comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Version string scoping the license namespace, e.g. `Imaris x64 7.6`
    pub imaris_version: String,
    /// Full path to the Imaris executable
    pub imaris_path: String,
    /// Product name -> visible to end users
    pub products_with_enabled_state: BTreeMap<String, bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Version, path and at least one product entry are present
    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Like [`Settings::is_valid`], but names what is missing
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SelectorError::Config(format!(
                "Settings are incomplete, missing: {}",
                missing.join(", ")
            )))
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.imaris_version.is_empty() {
            missing.push("Imaris version");
        }
        if self.imaris_path.is_empty() {
            missing.push("Imaris path");
        }
        if self.products_with_enabled_state.is_empty() {
            missing.push("product selection");
        }
        missing
    }

    pub fn set_product_visible(&mut self, product: impl Into<String>, visible: bool) {
        self.products_with_enabled_state.insert(product.into(), visible);
    }

    /// Whether the administrator made a product visible; unlisted means hidden
    pub fn is_product_visible(&self, product: &str) -> bool {
        self.products_with_enabled_state
            .get(product)
            .copied()
            .unwrap_or(false)
    }

    /// Products flagged visible, alphabetical
    pub fn visible_products(&self) -> impl Iterator<Item = &str> {
        self.products_with_enabled_state
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(name, _)| name.as_str())
    }
}
