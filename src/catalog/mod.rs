//! Static module and product catalog
//!
//! The catalog is an immutable arena of module records. Products are not
//! stored as such: a product is the set of modules sharing a product name,
//! paired with a description from the product table.

mod data;

use serde::Serialize;
use std::collections::BTreeSet;

/// Text shown whenever a catalog lookup has no match
pub const UNKNOWN: &str = "Unknown module.";

/// Product every installation has; always shown, never admin-filtered
pub const BASE_PRODUCT: &str = "Imaris";

/// Product holding the proprietary file format readers
pub const FILE_READER_PRODUCT: &str = "File Reader";

/// A licensed feature module of Imaris
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    /// Value name used in the license store
    pub id: String,
    pub display_name: String,
    /// Name of the owning product
    pub product: String,
    pub description: String,
}

/// A product grouping of modules
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Product {
    pub name: String,
    pub description: String,
}

/// Result of a catalog lookup that may not match anything
///
/// `Found("")` is a legitimate empty description; `Unknown` means the lookup
/// failed. Both render as text, the latter as [`UNKNOWN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    Unknown,
}

impl<'a> Lookup<'a> {
    /// Text to display, degrading to the sentinel on a miss
    pub fn as_str(&self) -> &'a str {
        match self {
            Lookup::Found(value) => value,
            Lookup::Unknown => UNKNOWN,
        }
    }

    pub fn found(&self) -> Option<&'a str> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Lookup::Unknown)
    }
}

impl std::fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only table of all known modules and products
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: Vec<Module>,
    /// (name, description) in table order
    products: Vec<(String, String)>,
}

impl Catalog {
    /// The built-in Imaris catalog
    pub fn imaris() -> Self {
        let modules = data::MODULES
            .iter()
            .map(|(id, display_name, product, description)| Module {
                id: id.to_string(),
                display_name: display_name.to_string(),
                product: product.to_string(),
                description: description.to_string(),
            })
            .collect();
        let products = data::PRODUCTS
            .iter()
            .map(|(name, description)| (name.to_string(), description.to_string()))
            .collect();

        Self { modules, products }
    }

    /// All modules in catalog order
    pub fn all_modules(&self) -> &[Module] {
        &self.modules
    }

    /// Distinct products that own at least one module, sorted by name
    pub fn all_products(&self) -> Vec<Product> {
        let names: BTreeSet<&str> = self.modules.iter().map(|m| m.product.as_str()).collect();
        names
            .into_iter()
            .map(|name| Product {
                name: name.to_string(),
                description: self.product_description(name).as_str().to_string(),
            })
            .collect()
    }

    /// Every product with a description entry, in table order
    pub fn all_product_names(&self) -> Vec<&str> {
        self.products.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn find_module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn contains_product(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m.product == name)
            || self.products.iter().any(|(product, _)| product == name)
    }

    /// Module ids of a product, in catalog order
    pub fn modules_of(&self, product: &str) -> Vec<&str> {
        self.modules
            .iter()
            .filter(|m| m.product == product)
            .map(|m| m.id.as_str())
            .collect()
    }

    /// Union of [`Catalog::modules_of`] over several products, without duplicates
    pub fn modules_of_products<I, S>(&self, products: I) -> Vec<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ids = Vec::new();
        for product in products {
            for id in self.modules_of(product.as_ref()) {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    pub fn product_of(&self, id: &str) -> Lookup<'_> {
        match self.find_module(id) {
            Some(module) => Lookup::Found(&module.product),
            None => Lookup::Unknown,
        }
    }

    /// Distinct products touched by the given module ids, alphabetical
    ///
    /// Ids unknown to the catalog are ignored.
    pub fn products_of<I, S>(&self, ids: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| self.product_of(id.as_ref()).found())
            .map(str::to_string)
            .collect()
    }

    pub fn module_display_name(&self, id: &str) -> Lookup<'_> {
        match self.find_module(id) {
            Some(module) => Lookup::Found(&module.display_name),
            None => Lookup::Unknown,
        }
    }

    pub fn module_description(&self, id: &str) -> Lookup<'_> {
        match self.find_module(id) {
            Some(module) => Lookup::Found(&module.description),
            None => Lookup::Unknown,
        }
    }

    pub fn product_description(&self, name: &str) -> Lookup<'_> {
        self.products
            .iter()
            .find(|(product, _)| product == name)
            .map(|(_, description)| Lookup::Found(description.as_str()))
            .unwrap_or(Lookup::Unknown)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::imaris()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: &str, product: &str) -> Module {
        Module {
            id: id.to_string(),
            display_name: id.to_string(),
            product: product.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_every_module_belongs_to_its_product() {
        let catalog = Catalog::imaris();
        for module in catalog.all_modules() {
            let product = catalog.product_of(&module.id);
            assert_eq!(product, Lookup::Found(module.product.as_str()));
            assert!(catalog.modules_of(product.as_str()).contains(&module.id.as_str()));
        }
    }

    #[test]
    fn test_builtin_table_is_well_formed() {
        let catalog = Catalog::imaris();
        let mut seen = std::collections::HashSet::new();
        for module in catalog.all_modules() {
            assert!(!module.product.is_empty(), "{} has no product", module.id);
            assert!(seen.insert(module.id.as_str()), "{} is listed twice", module.id);
        }
    }

    #[test]
    fn test_unknown_lookups_degrade_to_sentinel() {
        let catalog = Catalog::imaris();
        assert!(catalog.product_of("NoSuchModule").is_unknown());
        assert_eq!(catalog.product_of("NoSuchModule").as_str(), UNKNOWN);
        assert_eq!(catalog.module_description("NoSuchModule").to_string(), UNKNOWN);
        assert_eq!(catalog.product_description("No Such Product").as_str(), UNKNOWN);
    }

    #[test]
    fn test_display_names() {
        let catalog = Catalog::imaris();
        assert_eq!(catalog.module_display_name("ImarisIPSS").as_str(), "Imaris XT");
        assert_eq!(
            catalog.module_display_name("ImarisReaderBiorad").found(),
            Some("Bio-Rad MRC (series)")
        );
        assert!(catalog.module_display_name("Bogus").is_unknown());
    }

    #[test]
    fn test_empty_description_is_not_a_miss() {
        let catalog = Catalog::imaris();
        assert_eq!(catalog.module_description("ImarisTrack"), Lookup::Found(""));
        assert_eq!(
            catalog.module_description("ImarisReaderBiorad").as_str(),
            "Supported extensions: *.pic"
        );
    }

    #[test]
    fn test_products_of_is_sorted_and_distinct() {
        let catalog = Catalog::imaris();
        let products = catalog.products_of(["ImarisTrack", "ImarisBase", "ImarisTime", "Bogus"]);
        let products: Vec<&str> = products.iter().map(String::as_str).collect();
        assert_eq!(products, vec!["Imaris", "Imaris Track"]);
    }

    #[test]
    fn test_modules_of_keeps_catalog_order() {
        let catalog = Catalog::imaris();
        assert_eq!(
            catalog.modules_of("Imaris Measurement Pro"),
            vec!["ImarisManualSurface", "ImarisMeasurementPoint", "ImarisStatistics"]
        );
        assert!(catalog.modules_of("Imaris Batch").is_empty());
    }

    #[test]
    fn test_modules_of_products_is_union() {
        let catalog = Catalog::imaris();
        let ids = catalog.modules_of_products(["Imaris Track", "Imaris Coloc", "Imaris Track"]);
        assert_eq!(ids, vec!["ImarisTrack", "ImarisColoc"]);
    }

    #[test]
    fn test_all_products_only_lists_products_with_modules() {
        let catalog = Catalog::imaris();
        let products = catalog.all_products();
        assert!(products.iter().any(|p| p.name == FILE_READER_PRODUCT));
        assert!(!products.iter().any(|p| p.name == "AutoQuant"));
        assert!(catalog.all_product_names().contains(&"AutoQuant"));
        let imaris = products.iter().find(|p| p.name == BASE_PRODUCT).unwrap();
        assert_eq!(
            imaris.description,
            "3D and 4D Real-Time Interactive Image Visualization."
        );
    }

    #[test]
    fn test_product_without_description_falls_back() {
        let catalog = Catalog {
            modules: vec![module("X", "Orphaned Product")],
            products: Vec::new(),
        };
        assert_eq!(catalog.all_products()[0].description, UNKNOWN);
    }
}
