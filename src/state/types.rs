use serde::Serialize;
use std::path::PathBuf;

/// Vendor key under which Imaris keeps its per-user settings
pub const VENDOR: &str = "Bitplane";

/// Final path component of every license namespace
pub const LICENSES_KEY: &str = "Licenses";

/// Version-scoped location of the license flags of one user
///
/// Renders as `<user>/<vendor>/<version>/Licenses/`, so several Imaris
/// versions on the same machine keep independent license state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Namespace {
    pub user: String,
    pub vendor: String,
    pub version: String,
}

impl Namespace {
    pub fn new(user: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            vendor: VENDOR.to_string(),
            version: version.into(),
        }
    }

    /// Namespace of the user running this process
    pub fn for_current_user(version: impl Into<String>) -> Self {
        Self::new(current_user(), version)
    }

    /// Path of the namespace relative to a store root
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.user)
            .join(&self.vendor)
            .join(&self.version)
            .join(LICENSES_KEY)
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/",
            self.user, self.vendor, self.version, LICENSES_KEY
        )
    }
}

/// Identity of the current user
///
/// `IMARIS_SELECTOR_USER` wins over the login name from the environment.
pub fn current_user() -> String {
    ["IMARIS_SELECTOR_USER", "USER", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "default".to_string())
}

/// Store encoding of a license flag
pub fn encode_flag(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

/// Decode a stored flag; anything but the two literals is malformed
pub fn decode_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_display() {
        let namespace = Namespace::new("S-1-5-21", "Imaris x64 7.6");
        assert_eq!(namespace.to_string(), "S-1-5-21/Bitplane/Imaris x64 7.6/Licenses/");
        assert_eq!(
            namespace.relative_path(),
            PathBuf::from("S-1-5-21/Bitplane/Imaris x64 7.6/Licenses")
        );
    }

    #[test]
    fn test_flag_encoding() {
        assert_eq!(encode_flag(true), "true");
        assert_eq!(encode_flag(false), "false");
        assert_eq!(decode_flag("true\n"), Some(true));
        assert_eq!(decode_flag("false"), Some(false));
        assert_eq!(decode_flag("TRUE"), None);
        assert_eq!(decode_flag(""), None);
    }
}
