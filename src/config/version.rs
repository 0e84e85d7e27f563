use once_cell::sync::Lazy;
use regex::Regex;

/// `...\Imaris x64 7.6.0\Imaris.exe` and friends
static EXECUTABLE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)imaris\s*(x64)?\s*(\d{1,2})\.(\d{1,2})(?:\.\d{1,2})*[\\/]imaris\.exe$")
        .expect("executable path pattern is valid")
});

/// Derive the license namespace version from the path of an Imaris executable
///
/// Imaris installs into a folder named after its version, and the same
/// version string (without the patch level) scopes its license flags:
/// `C:\Program Files\Bitplane\Imaris x64 7.6.1\Imaris.exe` yields
/// `Imaris x64 7.6`. Returns `None` for paths that do not look like an Imaris
/// installation.
pub fn version_from_executable_path(path: &str) -> Option<String> {
    let captures = EXECUTABLE_PATH.captures(path.trim())?;
    let major = captures.get(2)?.as_str();
    let minor = captures.get(3)?.as_str();

    if captures.get(1).is_some() {
        Some(format!("Imaris x64 {}.{}", major, minor))
    } else {
        Some(format!("Imaris {}.{}", major, minor))
    }
}
