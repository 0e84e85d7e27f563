//! End-to-end tests running the selector binary against a temporary machine layout

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const IMARIS_EXE: &str = r"C:\Program Files\Bitplane\Imaris x64 7.6.0\Imaris.exe";
const VERSION: &str = "Imaris x64 7.6";

fn selector(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imaris-selector"))
        .args(args)
        .env("IMARIS_SELECTOR_CONFIG_DIR", root.join("shared"))
        .env("IMARIS_SELECTOR_STORE_DIR", root.join("users"))
        .env("IMARIS_SELECTOR_USER", "alice")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run imaris-selector")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn licenses_dir(root: &Path) -> PathBuf {
    root.join("users")
        .join("alice")
        .join("Bitplane")
        .join(VERSION)
        .join("Licenses")
}

/// Configure the machine and lay out the flags Imaris would have written
fn configured_machine(flags: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let output = selector(temp_dir.path(), &["admin", "init", IMARIS_EXE, "--hide", "Imaris XT"]);
    assert!(output.status.success(), "admin init failed: {}", stderr(&output));

    let dir = licenses_dir(temp_dir.path());
    fs::create_dir_all(&dir).unwrap();
    for (id, value) in flags {
        fs::write(dir.join(id), value).unwrap();
    }
    temp_dir
}

fn flag(root: &Path, id: &str) -> String {
    fs::read_to_string(licenses_dir(root).join(id)).unwrap()
}

#[test]
fn test_unconfigured_machine_is_refused() {
    let temp_dir = TempDir::new().unwrap();
    let output = selector(temp_dir.path(), &["list"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("not configured"), "{}", stderr(&output));
}

#[test]
fn test_admin_init_writes_settings_file() {
    let temp_dir = configured_machine(&[]);

    let content =
        fs::read_to_string(temp_dir.path().join("shared/ImarisSelector/settings.conf")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "FileVersion=ImarisSelector Settings File version 1");
    assert_eq!(lines[1], "ImarisVersion=Imaris x64 7.6");
    assert_eq!(lines[2], format!("ImarisPath={}", IMARIS_EXE));
    assert!(lines.contains(&"Imaris XT=false"));
    assert!(lines.contains(&"Imaris Track=true"));
    assert!(!lines.contains(&"Imaris=true"));

    let output = selector(temp_dir.path(), &["admin", "show", "--format", "json"]);
    assert!(output.status.success());
    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["imaris_version"], VERSION);
    assert_eq!(json["products_with_enabled_state"]["Imaris Coloc"], true);

    let output = selector(temp_dir.path(), &["admin", "show"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Hidden:         Imaris XT\n"));
}

#[test]
fn test_admin_rejects_unrecognised_executable() {
    let temp_dir = TempDir::new().unwrap();
    let output = selector(temp_dir.path(), &["admin", "init", "/usr/bin/fiji"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid Imaris executable"));
    assert!(!temp_dir.path().join("shared/ImarisSelector/settings.conf").exists());

    // An explicit version makes any path acceptable
    let output = selector(
        temp_dir.path(),
        &["admin", "init", "/usr/bin/fiji", "--version", "Imaris 9.0"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
}

#[test]
fn test_admin_visibility_changes() {
    let temp_dir = configured_machine(&[]);

    let output = selector(temp_dir.path(), &["admin", "show-product", "Imaris XT"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let output = selector(temp_dir.path(), &["admin", "hide-product", "Imaris Track"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let content =
        fs::read_to_string(temp_dir.path().join("shared/ImarisSelector/settings.conf")).unwrap();
    assert!(content.contains("Imaris XT=true"));
    assert!(content.contains("Imaris Track=false"));

    let output = selector(temp_dir.path(), &["admin", "show-product", "Imaris Teleport"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown products: Imaris Teleport"));
}

#[test]
fn test_start_resets_flags_and_lists_visible_products() {
    let temp_dir = configured_machine(&[
        ("ImarisBase", "false"),
        ("ImarisReaderLeica", "false"),
        ("ImarisTrack", "true"),
        ("ImarisColoc", "false"),
        ("ImarisIPSS", "true"),
    ]);

    let output = selector(temp_dir.path(), &["start", "--format", "json"]);
    assert!(output.status.success(), "{}", stderr(&output));

    assert_eq!(flag(temp_dir.path(), "ImarisBase"), "true");
    assert_eq!(flag(temp_dir.path(), "ImarisReaderLeica"), "true");
    assert_eq!(flag(temp_dir.path(), "ImarisTrack"), "false");
    assert_eq!(flag(temp_dir.path(), "ImarisIPSS"), "false");
    // Startup products are switched on in full, flags Imaris never wrote included
    assert_eq!(flag(temp_dir.path(), "ImarisTime"), "true");
    assert_eq!(flag(temp_dir.path(), "ImarisReaderZeiss"), "true");

    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["license_information_found"], true);
    let names: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    // Imaris XT is installed but hidden by the administrator
    assert_eq!(names, vec!["File Reader", "Imaris Coloc", "Imaris Track"]);
    assert_eq!(json["entries"][0]["enabled"], true);
    assert_eq!(json["entries"][2]["enabled"], false);
}

#[test]
fn test_enable_and_disable_products() {
    let temp_dir = configured_machine(&[
        ("ImarisBase", "true"),
        ("ImarisTrack", "false"),
        ("ImarisColoc", "false"),
    ]);

    let output = selector(temp_dir.path(), &["enable", "Imaris Track", "Imaris Coloc"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Enabled Imaris Track"));
    assert_eq!(flag(temp_dir.path(), "ImarisTrack"), "true");
    assert_eq!(flag(temp_dir.path(), "ImarisColoc"), "true");

    let output = selector(temp_dir.path(), &["disable", "--by", "module", "ImarisColoc"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(flag(temp_dir.path(), "ImarisColoc"), "false");

    let output = selector(temp_dir.path(), &["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("[x] Imaris Track"), "{}", text);
    assert!(text.contains("[ ] Imaris Coloc"), "{}", text);
}

#[test]
fn test_hidden_product_cannot_be_enabled() {
    let temp_dir = configured_machine(&[("ImarisBase", "true"), ("ImarisIPSS", "false")]);

    let output = selector(temp_dir.path(), &["enable", "Imaris XT"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Not available for selection"));
    assert_eq!(flag(temp_dir.path(), "ImarisIPSS"), "false");
}

#[test]
fn test_start_without_license_information_tries_to_launch() {
    let temp_dir = configured_machine(&[]);

    let output = selector(temp_dir.path(), &["start"]);
    assert!(stdout(&output).contains("No license information found"));
    // The configured Windows path does not exist here
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Imaris could not be started"));
    // Imaris writes the flags on its first run, the selector does not
    assert_eq!(fs::read_dir(licenses_dir(temp_dir.path())).unwrap().count(), 0);
}

#[test]
fn test_settings_written_by_admin_tool_are_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let settings_dir = temp_dir.path().join("shared/ImarisSelector");
    fs::create_dir_all(&settings_dir).unwrap();
    fs::write(
        settings_dir.join("settings.conf"),
        format!(
            "FileVersion=ImarisSelector Settings File version 1\r\nImarisVersion={}\r\nImarisPath={}\r\nImaris Coloc=true\r\nImaris Track=false\r\n",
            VERSION, IMARIS_EXE
        ),
    )
    .unwrap();
    let dir = licenses_dir(temp_dir.path());
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("ImarisColoc"), "true").unwrap();

    let output = selector(temp_dir.path(), &["list"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("[x] Imaris Coloc"));
}

#[test]
fn test_export_installed_modules() {
    let temp_dir = configured_machine(&[
        ("ImarisBase", "true"),
        ("ImarisTrack", "false"),
        ("ImarisAnalyzer", "true"),
    ]);
    let output_file = temp_dir.path().join("modules.txt");

    let output = selector(temp_dir.path(), &["export", output_file.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));

    let content = fs::read_to_string(&output_file).unwrap();
    assert_eq!(content, "ImarisBase\nImarisTrack\n\n2 modules exported.\n");
}

#[test]
fn test_describe_needs_no_configuration() {
    let temp_dir = TempDir::new().unwrap();

    let output = selector(temp_dir.path(), &["describe", "Imaris Track"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Discover the Meaning of Motion."));

    let output = selector(temp_dir.path(), &["describe", "--by", "module", "Bogus"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Unknown module."));
}
