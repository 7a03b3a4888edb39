use tracing::debug;

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::output::Console;
use crate::process::{CommandRunner, Invocation};

/// Run `git init` unless the target already has a `.git` directory.
pub fn ensure_repository(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    console: &Console,
) -> Result<(), SetupError> {
    if config.target(".git").exists() {
        debug!("git repository already initialized");
        return Ok(());
    }

    console.info("🔧 Initializing Git repository...");
    let init = Invocation::new(&config.tools.git, ["init"], &config.target_dir);
    runner.run(&init, "Failed to initialize Git repository")
}
