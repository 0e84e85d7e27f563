use crate::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// Module list dump: one id per line, a blank line, then the count
pub fn render_module_list<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    let mut count = 0;
    for id in ids {
        out.push_str(id.as_ref());
        out.push('\n');
        count += 1;
    }
    out.push('\n');
    out.push_str(&format!("{} modules exported.\n", count));
    out
}

/// Write the module list to a file, returning the number of modules written
pub fn export_module_list<I, S>(path: &Path, ids: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ids: Vec<S> = ids.into_iter().collect();
    fs::write(path, render_module_list(&ids))?;
    info!("Exported {} modules to {}", ids.len(), path.display());
    Ok(ids.len())
}
