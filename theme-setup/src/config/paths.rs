use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::debug;

/// Name of the template directory shipped with the binary.
const TEMPLATES_DIR_NAME: &str = "templates";

/// Templates directory of the source tree this binary was built from.
const BUILD_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Locate the bundled templates.
///
/// Looks next to the executable, then in `../share/shopify-theme-setup/`
/// relative to it, then falls back to the build tree.
pub fn find_bundled_templates_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(found) = probe_install_layout(&exe) {
            return found;
        }
    }
    PathBuf::from(BUILD_TEMPLATES_DIR)
}

fn probe_install_layout(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent().unwrap_or(Path::new("."));
    let beside = dir.join(TEMPLATES_DIR_NAME);
    if beside.is_dir() {
        return Some(beside);
    }

    let shared = dir
        .parent()
        .unwrap_or(Path::new("."))
        .join("share")
        .join("shopify-theme-setup")
        .join(TEMPLATES_DIR_NAME);
    if shared.is_dir() {
        return Some(shared);
    }
    None
}

/// Resolve the template directory: an explicit override wins, otherwise the
/// bundled one. Fails if the chosen directory does not exist.
pub fn resolve_templates_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => dir.to_path_buf(),
        None => find_bundled_templates_dir(),
    };
    debug!(templates_dir = %dir.display(), "resolved template directory");

    if !dir.is_dir() {
        bail!("Template directory not found at {}", dir.display());
    }
    Ok(dir)
}
