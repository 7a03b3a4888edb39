pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod process;
pub mod prompt;
pub mod stages;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::SetupConfig;
use crate::error::GENERIC_HEADLINE;
use crate::output::Console;
use crate::process::SystemRunner;
use crate::prompt::TerminalConfirm;

#[derive(Parser)]
#[command(
    name = "shopify-theme-setup",
    version,
    about = "Set up Prettier, Husky and lint-staged for a Shopify theme",
    long_about = "Creates package.json and a Git repository if needed, installs the formatting \
                  toolchain, copies editor and formatter configuration, and wires a pre-commit hook."
)]
struct Cli {
    /// Theme directory to set up (defaults to the current directory)
    #[arg(short, long, env = "THEME_SETUP_DIR")]
    dir: Option<PathBuf>,

    /// Directory containing the configuration templates
    #[arg(long, env = "THEME_SETUP_TEMPLATES")]
    templates: Option<PathBuf>,

    /// Print diagnostic logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(cli: &Cli) -> anyhow::Result<SetupConfig> {
    let target_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    if !target_dir.is_dir() {
        anyhow::bail!("Target directory not found at {}", target_dir.display());
    }
    let templates_dir = config::resolve_templates_dir(cli.templates.as_deref())?;
    Ok(SetupConfig::new(target_dir, templates_dir))
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let console = Console::stdout();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            console.error(GENERIC_HEADLINE);
            console.error_detail(&format!("{e:#}"));
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::setup::run(&config, &SystemRunner, &TerminalConfirm, &console) {
        tracing::debug!(error = %e, "setup aborted");
        console.report(&e);
        std::process::exit(1);
    }
}
