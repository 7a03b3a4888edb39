//! `package.json` creation and clean-up.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::SetupConfig;
use crate::error::{SetupError, GENERIC_HEADLINE};
use crate::output::Console;
use crate::process::{CommandRunner, Invocation};

pub const MANIFEST_FILE: &str = "package.json";

/// Create `package.json` with `npm init -y` if missing, then drop the
/// placeholder `scripts.test` entry npm generates.
pub fn ensure_manifest(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    console: &Console,
) -> Result<(), SetupError> {
    let path = config.target(MANIFEST_FILE);

    if !path.exists() {
        console.info("📦 Creating package.json...");
        let init = Invocation::new(&config.tools.npm, ["init", "-y"], &config.target_dir);
        runner.run(&init, "Failed to create package.json")?;
    } else {
        debug!(path = %path.display(), "manifest already exists");
    }

    let removed = strip_test_script_file(&path)?;
    info!(removed, "manifest cleaned");
    Ok(())
}

/// Remove `scripts.test` from a manifest value. Returns whether it was present.
pub fn strip_test_script(manifest: &mut Value) -> bool {
    manifest
        .get_mut("scripts")
        .and_then(Value::as_object_mut)
        .map(|scripts| scripts.shift_remove("test").is_some())
        .unwrap_or(false)
}

/// Read the manifest, strip `scripts.test` and write it back with two-space
/// indentation and a trailing newline. Key order is preserved.
pub fn strip_test_script_file(path: &Path) -> Result<bool, SetupError> {
    let content =
        fs::read_to_string(path).map_err(|e| SetupError::io(GENERIC_HEADLINE, path, e))?;

    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|e| SetupError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if !manifest.is_object() {
        return Err(SetupError::Manifest {
            path: path.to_path_buf(),
            message: "top-level value is not an object".into(),
        });
    }

    let removed = strip_test_script(&mut manifest);

    let formatted = serde_json::to_string_pretty(&manifest).map_err(|e| SetupError::Manifest {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, format!("{formatted}\n"))
        .map_err(|e| SetupError::io(GENERIC_HEADLINE, path, e))?;

    Ok(removed)
}
