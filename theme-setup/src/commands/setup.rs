//! Setup command - bootstrap a Shopify theme's front-end tooling.
//!
//! Stages run strictly in order and the first failure aborts the run. Files
//! written by earlier stages are left in place.

use tracing::info;

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::output::Console;
use crate::process::CommandRunner;
use crate::prompt::Confirm;
use crate::stages::templates::CONFIG_FILES;
use crate::stages::{conflicts, dependencies, hooks, manifest, preflight, repository, templates};

/// Run every stage against `config.target_dir`.
pub fn run(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
    confirm: &dyn Confirm,
    console: &Console,
) -> Result<(), SetupError> {
    console.info(&format!(
        "🚀 Shopify Theme Setup v{}",
        env!("CARGO_PKG_VERSION")
    ));
    console.info("Setting up your Shopify theme development environment...\n");
    info!(target_dir = %config.target_dir.display(), "starting setup");

    preflight::check_node_version(config, runner)?;
    manifest::ensure_manifest(config, runner, console)?;
    repository::ensure_repository(config, runner, console)?;
    let files = conflicts::resolve_conflicts(config, &CONFIG_FILES, confirm, console)?;
    dependencies::install_dev_dependencies(config, runner, console)?;
    templates::copy_config_files(config, &files, console)?;
    hooks::install_pre_commit_hook(config, runner, console)?;
    dependencies::ensure_lint_staged(config, runner, console)?;

    console.success(
        "\n✅ Setup complete! Your Shopify theme development environment is ready.",
    );
    console.info("\nNext steps:");
    console.detail("1. Start developing your theme");
    console.detail("2. Your code will be automatically formatted on commit");
    console.detail("3. VS Code will use the recommended settings and extensions\n");
    Ok(())
}
