use super::CommandHandler;
use crate::catalog::{Catalog, BASE_PRODUCT};
use crate::cli::{AdminCommands, OutputFormat};
use crate::config::{version_from_executable_path, Settings, SettingsStore};
use crate::io::SelectorPaths;
use crate::{Result, SelectorError};
use tracing::info;

/// Administrator actions on the shared settings file
#[derive(Debug, Clone)]
pub enum AdminAction {
    Show { format: OutputFormat },
    Init {
        imaris_path: String,
        version: Option<String>,
        hide: Vec<String>,
    },
    SetPath {
        imaris_path: String,
        version: Option<String>,
    },
    SetVisibility { products: Vec<String>, visible: bool },
}

impl From<AdminCommands> for AdminAction {
    fn from(command: AdminCommands) -> Self {
        match command {
            AdminCommands::Show { format } => AdminAction::Show { format },
            AdminCommands::Init {
                imaris_path,
                version,
                hide,
            } => AdminAction::Init {
                imaris_path,
                version,
                hide,
            },
            AdminCommands::SetPath {
                imaris_path,
                version,
            } => AdminAction::SetPath {
                imaris_path,
                version,
            },
            AdminCommands::ShowProduct { products } => AdminAction::SetVisibility {
                products,
                visible: true,
            },
            AdminCommands::HideProduct { products } => AdminAction::SetVisibility {
                products,
                visible: false,
            },
        }
    }
}

/// Handler for the `admin` subcommands
pub struct AdminCommand {
    pub paths: SelectorPaths,
    pub action: AdminAction,
}

impl CommandHandler for AdminCommand {
    fn execute(&self) -> Result<()> {
        let store = SettingsStore::from_paths(&self.paths);
        let catalog = Catalog::imaris();

        match &self.action {
            AdminAction::Show { format } => {
                let settings = store.read();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&settings)?);
                    }
                    OutputFormat::Text => print_settings(&store, &settings),
                }
                return Ok(());
            }
            AdminAction::Init {
                imaris_path,
                version,
                hide,
            } => {
                check_products(&catalog, hide)?;
                let mut settings = Settings::new();
                apply_executable(&mut settings, imaris_path, version.as_deref())?;
                for product in catalog.all_product_names() {
                    if product != BASE_PRODUCT {
                        settings.set_product_visible(product, !hide.iter().any(|h| h == product));
                    }
                }
                save(&store, &settings)?;
            }
            AdminAction::SetPath {
                imaris_path,
                version,
            } => {
                let mut settings = store.read();
                apply_executable(&mut settings, imaris_path, version.as_deref())?;
                save(&store, &settings)?;
            }
            AdminAction::SetVisibility { products, visible } => {
                check_products(&catalog, products)?;
                let mut settings = store.read();
                for product in products {
                    settings.set_product_visible(product.as_str(), *visible);
                }
                save(&store, &settings)?;
            }
        }

        println!("Settings saved to {}", store.path().display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "admin"
    }
}

impl AdminCommand {
    pub fn new(paths: SelectorPaths, action: impl Into<AdminAction>) -> Self {
        Self {
            paths,
            action: action.into(),
        }
    }
}

/// Set path and version, deriving the version from the path when not given
fn apply_executable(settings: &mut Settings, path: &str, version: Option<&str>) -> Result<()> {
    let version = match version {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => version_from_executable_path(path).ok_or_else(|| {
            SelectorError::Config(format!(
                "Invalid Imaris executable selected: {}. Pass --version to set the version explicitly.",
                path
            ))
        })?,
    };

    info!("Configuring {} at {}", version, path);
    settings.imaris_version = version;
    settings.imaris_path = path.to_string();
    Ok(())
}

fn check_products(catalog: &Catalog, products: &[String]) -> Result<()> {
    let unknown: Vec<&str> = products
        .iter()
        .map(String::as_str)
        .filter(|p| !catalog.contains_product(p))
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(SelectorError::Cli(format!(
            "Unknown products: {}",
            unknown.join(", ")
        )))
    }
}

/// Incomplete settings are never written
fn save(store: &SettingsStore, settings: &Settings) -> Result<()> {
    settings.validate()?;
    if store.write(settings) {
        Ok(())
    } else {
        Err(SelectorError::Config(format!(
            "Could not write settings to {}",
            store.path().display()
        )))
    }
}

fn print_settings(store: &SettingsStore, settings: &Settings) {
    println!("Settings file: {}", store.path().display());
    if !settings.is_valid() {
        println!("(not configured)");
    }
    println!("Imaris version: {}", settings.imaris_version);
    println!("Imaris path:    {}", settings.imaris_path);
    println!(
        "Visible:        {}",
        settings.visible_products().collect::<Vec<_>>().join(", ")
    );
    let hidden: Vec<&str> = settings
        .products_with_enabled_state
        .iter()
        .filter(|(_, visible)| !**visible)
        .map(|(product, _)| product.as_str())
        .collect();
    println!("Hidden:         {}", hidden.join(", "));
}
