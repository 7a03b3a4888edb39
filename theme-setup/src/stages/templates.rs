//! Template table and configuration file copying.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::output::Console;

/// A file written into the target, and the template it is copied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFile {
    /// Path relative to the target directory.
    pub target: &'static str,
    /// Path relative to the template directory.
    pub template: &'static str,
}

/// Configuration files subject to the overwrite prompt, in copy order.
pub const CONFIG_FILES: [ConfigFile; 6] = [
    ConfigFile {
        target: ".prettierrc.json",
        template: "prettierrc.json",
    },
    ConfigFile {
        target: ".gitignore",
        template: "gitignore",
    },
    ConfigFile {
        target: ".shopifyignore",
        template: "shopifyignore",
    },
    ConfigFile {
        target: ".vscode/extensions.json",
        template: "vscode/extensions.json",
    },
    ConfigFile {
        target: ".vscode/settings.json",
        template: "vscode/settings.json",
    },
    ConfigFile {
        target: ".lintstagedrc",
        template: "lintstagedrc",
    },
];

/// The pre-commit hook, always overwritten.
pub const PRE_COMMIT_HOOK: ConfigFile = ConfigFile {
    target: ".husky/pre-commit",
    template: "husky/pre-commit",
};

/// Editor settings directory created before copying.
pub const VSCODE_DIR: &str = ".vscode";

/// Copy one template over its target path, replacing any existing file.
pub fn copy_template(config: &SetupConfig, file: &ConfigFile) -> Result<(), SetupError> {
    let source = config.template(file.template);
    let target = config.target(file.target);
    copy_file(&source, &target, "Failed to copy configuration files")
}

/// Byte copy that reports the source path when the template is missing.
pub(crate) fn copy_file(source: &Path, target: &Path, context: &str) -> Result<(), SetupError> {
    if !source.is_file() {
        return Err(SetupError::io(
            context,
            source,
            std::io::Error::new(std::io::ErrorKind::NotFound, "template not found"),
        ));
    }
    fs::copy(source, target).map_err(|e| SetupError::io(context, target, e))?;
    debug!(source = %source.display(), target = %target.display(), "copied template");
    Ok(())
}

/// Ensure `.vscode/` exists, then copy every file in `files`.
///
/// Stops at the first failure; files already copied stay in place.
pub fn copy_config_files(
    config: &SetupConfig,
    files: &[ConfigFile],
    console: &Console,
) -> Result<(), SetupError> {
    console.info("📄 Creating configuration files...");

    let vscode = config.target(VSCODE_DIR);
    fs::create_dir_all(&vscode)
        .map_err(|e| SetupError::io("Failed to copy configuration files", &vscode, e))?;

    for file in files {
        copy_template(config, file)?;
        console.success(&format!("✓ Created {}", file.target));
    }
    Ok(())
}
