//! Husky scaffolding and the bundled pre-commit hook.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::SetupConfig;
use crate::error::{SetupError, GENERIC_HEADLINE};
use crate::output::Console;
use crate::process::{CommandRunner, Invocation};
use crate::stages::templates::{copy_file, PRE_COMMIT_HOOK};

/// Run `npx husky-init`, then replace whatever hook it generated with the
/// bundled one and make it executable.
///
/// Only the existence of `.husky/` is relied upon from the scaffold; it is
/// created here if the scaffold did not.
pub fn install_pre_commit_hook(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    console: &Console,
) -> Result<(), SetupError> {
    console.info("\n🐶 Setting up Husky for pre-commit hooks...");
    let scaffold = Invocation::new(&config.tools.npx, ["husky-init"], &config.target_dir);
    runner.run(&scaffold, "Failed to initialize Husky")?;

    let target = config.target(PRE_COMMIT_HOOK.target);
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir).map_err(|e| SetupError::io(GENERIC_HEADLINE, dir, e))?;
    }

    copy_file(
        &config.template(PRE_COMMIT_HOOK.template),
        &target,
        GENERIC_HEADLINE,
    )?;
    make_executable(&target)?;
    debug!(hook = %target.display(), "pre-commit hook installed");
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), SetupError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| SetupError::io(GENERIC_HEADLINE, path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), SetupError> {
    Ok(())
}
