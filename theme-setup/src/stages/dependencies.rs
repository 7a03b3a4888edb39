//! Dev dependency installation and the lint-staged presence check.

use tracing::info;

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::output::Console;
use crate::process::{CommandRunner, Invocation};

/// Tooling installed as dev dependencies, in install order.
pub const DEV_DEPENDENCIES: [&str; 3] = ["prettier", "husky", "lint-staged"];

pub const LINT_STAGED: &str = "lint-staged";

fn install_dev(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    packages: &[&str],
    context: &str,
) -> Result<(), SetupError> {
    let args = ["install", "--save-dev"]
        .into_iter()
        .chain(packages.iter().copied());
    let install = Invocation::new(&config.tools.npm, args, &config.target_dir);
    runner.run(&install, context)
}

/// `npm install --save-dev prettier husky lint-staged`.
pub fn install_dev_dependencies(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    console: &Console,
) -> Result<(), SetupError> {
    console.info("\n📚 Installing dependencies...");
    install_dev(
        config,
        runner,
        &DEV_DEPENDENCIES,
        "Failed to install dependencies",
    )
}

/// Install lint-staged again and confirm it landed in `node_modules`.
///
/// A successful install that leaves no package directory is treated as a
/// failure of its own.
pub fn ensure_lint_staged(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    console: &Console,
) -> Result<(), SetupError> {
    console.info("🔍 Configuring lint-staged...");
    install_dev(
        config,
        runner,
        &[LINT_STAGED],
        "Failed to install lint-staged",
    )?;

    let installed = config.target("node_modules").join(LINT_STAGED);
    if !installed.is_dir() {
        return Err(SetupError::Verification(
            "lint-staged installation failed".into(),
        ));
    }

    info!(path = %installed.display(), "lint-staged present");
    Ok(())
}
