//! Settings file behaviour through the public store API

use imaris_selector::config::{Settings, SettingsStore, FILE_VERSION_LINE};
use imaris_selector::SelectorPaths;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_round_trip_at_standard_location() {
    let temp_dir = TempDir::new().unwrap();
    let paths = SelectorPaths::for_root(temp_dir.path());
    let store = SettingsStore::from_paths(&paths);

    let mut settings = Settings::new();
    settings.imaris_version = "Imaris 7.6".to_string();
    settings.imaris_path = "/opt/Imaris 7.6.0/Imaris.exe".to_string();
    settings.set_product_visible("Imaris XT", true);
    settings.set_product_visible("Imaris Track", false);
    settings.set_product_visible("File Reader", true);

    assert!(store.write(&settings));
    assert!(paths.settings_file().is_file());

    let read = store.read();
    assert_eq!(read, settings);
    assert!(read.is_valid());
    assert_eq!(
        read.visible_products().collect::<Vec<_>>(),
        vec!["File Reader", "Imaris XT"]
    );
}

#[test]
fn test_zero_product_lines_is_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.conf");
    fs::write(
        &path,
        format!(
            "{}\nImarisVersion=Imaris 7.6\nImarisPath=/opt/Imaris 7.6.0/Imaris.exe\n",
            FILE_VERSION_LINE
        ),
    )
    .unwrap();

    let settings = SettingsStore::new(&path).read();
    assert_eq!(settings.imaris_version, "Imaris 7.6");
    assert!(settings.products_with_enabled_state.is_empty());
    assert!(!settings.is_valid());
    assert!(settings.validate().is_err());
}

#[test]
fn test_value_may_contain_equals_sign() {
    let temp_dir = TempDir::new().unwrap();
    let store = SettingsStore::new(temp_dir.path().join("settings.conf"));

    let mut settings = Settings::new();
    settings.imaris_version = "Imaris 7.6".to_string();
    settings.imaris_path = "/opt/a=b/Imaris.exe".to_string();
    settings.set_product_visible("Imaris Coloc", true);

    assert!(store.write(&settings));
    assert_eq!(store.read().imaris_path, "/opt/a=b/Imaris.exe");
}

#[test]
fn test_write_into_unwritable_location_fails() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let store = SettingsStore::new(blocker.join("settings.conf"));
    assert!(!store.write(&Settings::new()));
}
