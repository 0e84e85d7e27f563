//! License reconciliation engine
//!
//! Combines three independent signals:
//! - what is installed (flags present in the license store)
//! - what the administrator made visible (settings file)
//! - what the user switched on (flag values)
//!
//! Queries are recomputed from the store on every call; commands write
//! through to it immediately. Product commands broadcast to every catalog
//! module of the product, and a product counts as enabled as soon as one of
//! its modules is.

use crate::catalog::{Catalog, BASE_PRODUCT, FILE_READER_PRODUCT};
use crate::config::Settings;
use crate::state::LicenseStore;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub mod view;

pub use view::{Description, ListEntry, ViewMode};

/// Products enabled unconditionally at the start of every session
pub const STARTUP_PRODUCTS: &[&str] = &[BASE_PRODUCT, FILE_READER_PRODUCT];

/// Per-id result of a best-effort batch write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Ids whose flag was written
    pub applied: Vec<String>,
    /// Ids that are not installed or could not be written
    pub failed: Vec<String>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn merge(&mut self, other: BatchOutcome) {
        self.applied.extend(other.applied);
        self.failed.extend(other.failed);
    }
}

/// The composition root the selector front ends talk to
#[derive(Debug)]
pub struct Engine {
    catalog: Arc<Catalog>,
    store: LicenseStore,
    settings: Settings,
}

impl Engine {
    /// Create an engine and reset the session to its startup state
    ///
    /// Every installed module is disabled, then the base product and the file
    /// readers are enabled, whatever a previous session left behind. Without
    /// license information the flags are left untouched, so that Imaris can
    /// write them on its first run.
    pub fn new(catalog: Arc<Catalog>, store: LicenseStore, settings: Settings) -> Self {
        let mut engine = Self::attach(catalog, store, settings);
        if engine.license_information_found() {
            engine.apply_startup_policy();
        } else {
            info!("No license information in {}", engine.store.namespace());
        }
        engine
    }

    /// Create an engine over the current flags without touching them
    pub fn attach(catalog: Arc<Catalog>, store: LicenseStore, settings: Settings) -> Self {
        debug!("Attaching engine to license namespace {}", store.namespace());
        Self {
            catalog,
            store,
            settings,
        }
    }

    /// Disable everything, then enable [`STARTUP_PRODUCTS`]
    pub fn apply_startup_policy(&mut self) -> BatchOutcome {
        let mut outcome = self.disable_all_modules();
        outcome.merge(self.enable_products(STARTUP_PRODUCTS));
        info!(
            "Startup policy applied to {}: {} writes, {} failed",
            self.store.namespace(),
            outcome.applied.len(),
            outcome.failed.len()
        );
        outcome
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// False when Imaris has never run for this user and version
    pub fn license_information_found(&self) -> bool {
        !self.store.installed_module_ids().is_empty()
    }

    pub fn installed_module_ids(&self) -> BTreeSet<String> {
        self.store.installed_module_ids()
    }

    pub fn installed_products(&self) -> BTreeSet<String> {
        self.catalog.products_of(self.store.installed_module_ids())
    }

    /// Installed products the administrator made visible, sorted by name
    ///
    /// The base product is always available and therefore never listed here.
    pub fn installed_and_admin_visible_products(&self) -> Vec<String> {
        self.installed_products()
            .into_iter()
            .filter(|product| product != BASE_PRODUCT)
            .filter(|product| self.settings.is_product_visible(product))
            .collect()
    }

    /// Modules of the visible products, in catalog order
    pub fn filtered_module_names(&self) -> Vec<String> {
        self.catalog
            .modules_of_products(self.installed_and_admin_visible_products())
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn is_module_enabled(&self, id: &str) -> bool {
        self.store.is_enabled(id)
    }

    pub fn is_product_enabled(&self, product: &str) -> bool {
        self.catalog
            .modules_of(product)
            .into_iter()
            .any(|id| self.store.is_enabled(id))
    }

    pub fn enable_module(&mut self, id: &str) -> bool {
        self.set_modules([id], true).is_complete()
    }

    pub fn disable_module(&mut self, id: &str) -> bool {
        self.set_modules([id], false).is_complete()
    }

    pub fn enable_modules<I, S>(&mut self, ids: I) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_modules(ids, true)
    }

    pub fn disable_modules<I, S>(&mut self, ids: I) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_modules(ids, false)
    }

    /// Enable every catalog module of the given products
    ///
    /// Modules without a flag yet get one, so a product switched on stays
    /// fully on once Imaris reads the namespace.
    pub fn enable_products<I, S>(&mut self, products: I) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = self.module_ids_of(products);
        self.set_modules(ids, true)
    }

    pub fn disable_products<I, S>(&mut self, products: I) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = self.module_ids_of(products);
        self.set_modules(ids, false)
    }

    pub fn enable_all_modules(&mut self) -> BatchOutcome {
        let ids = self.store.installed_module_ids();
        self.set_modules(ids, true)
    }

    pub fn disable_all_modules(&mut self) -> BatchOutcome {
        let ids = self.store.installed_module_ids();
        self.set_modules(ids, false)
    }

    fn module_ids_of<I, S>(&self, products: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.catalog
            .modules_of_products(products)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Write one flag per id, carrying on past failures
    fn set_modules<I, S>(&mut self, ids: I, enabled: bool) -> BatchOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = BatchOutcome::default();

        for id in ids {
            let id = id.as_ref();
            if self.store.set_enabled(id, enabled) {
                outcome.applied.push(id.to_string());
            } else {
                outcome.failed.push(id.to_string());
            }
        }

        if !outcome.failed.is_empty() {
            warn!(
                "Could not {} modules: {}",
                if enabled { "enable" } else { "disable" },
                outcome.failed.join(", ")
            );
        }
        outcome
    }
}
