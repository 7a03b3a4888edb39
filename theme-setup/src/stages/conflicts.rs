//! Detect configuration files that already exist and ask once whether to
//! overwrite all of them.

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::output::Console;
use crate::prompt::Confirm;
use crate::stages::templates::ConfigFile;

pub const OVERWRITE_PROMPT: &str = "\nDo you want to overwrite these files? (y/N) ";

/// Files from `files` whose target path exists.
pub fn find_existing(config: &SetupConfig, files: &[ConfigFile]) -> Vec<ConfigFile> {
    files
        .iter()
        .filter(|file| config.target(file.target).exists())
        .copied()
        .collect()
}

/// Drop `existing` from `files`, keeping the original order.
pub fn without(files: &[ConfigFile], existing: &[ConfigFile]) -> Vec<ConfigFile> {
    files
        .iter()
        .filter(|file| !existing.contains(file))
        .copied()
        .collect()
}

/// Return the files the copy stage should write.
///
/// Prompts only when something already exists. An affirmative answer keeps
/// the full list; anything else skips every existing file.
pub fn resolve_conflicts(
    config: &SetupConfig,
    files: &[ConfigFile],
    confirm: &dyn Confirm,
    console: &Console,
) -> Result<Vec<ConfigFile>, SetupError> {
    let existing = find_existing(config, files);
    if existing.is_empty() {
        return Ok(files.to_vec());
    }

    console.warn("⚠️  The following configuration files already exist:");
    for file in &existing {
        console.warn(&format!("   - {}", file.target));
    }

    if confirm.confirm(OVERWRITE_PROMPT)? {
        tracing::info!(count = existing.len(), "overwriting existing files");
        return Ok(files.to_vec());
    }

    console.info("\nSkipping existing files. Setup will continue with remaining configurations.");
    Ok(without(files, &existing))
}
