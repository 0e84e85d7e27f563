use crate::{Result, SelectorError};
use std::process::{Child, Command};
use tracing::info;

/// Start the Imaris executable at `path`
///
/// The child is detached from the selector; the caller decides whether to
/// exit afterwards.
pub fn launch_imaris(path: &str) -> Result<Child> {
    if path.trim().is_empty() {
        return Err(SelectorError::Launch(
            "no Imaris executable is configured".to_string(),
        ));
    }

    let child = Command::new(path)
        .spawn()
        .map_err(|e| SelectorError::Launch(format!("{}: {}", path, e)))?;
    info!("Started {} (pid {})", path, child.id());
    Ok(child)
}
