//! Error taxonomy for the setup run.
//!
//! Every variant aborts the run. The top-level handler prints
//! [`SetupError::headline`] and [`SetupError::detail`] and exits with status 1.

use std::io;
use std::path::PathBuf;

/// Headline used for failures that no stage reports with its own message.
pub const GENERIC_HEADLINE: &str = "An error occurred during setup:";

/// Errors that can abort a setup run.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Node.js version {required} or higher is required (found {found})")]
    UnsupportedNode { required: u32, found: String },

    #[error("could not determine Node.js version: {reason}")]
    NodeVersionUnreadable { required: u32, reason: String },

    #[error("{context}: `{command}` exited with {status}")]
    CommandFailed {
        context: String,
        command: String,
        status: String,
    },

    #[error("{context}: `{program}` not found on PATH")]
    CommandUnavailable {
        context: String,
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("{context}: {}: {source}", .path.display())]
    Io {
        context: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid package manifest at {}: {message}", .path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("{0}")]
    Verification(String),

    #[error("failed to read confirmation answer: {0}")]
    Prompt(#[source] io::Error),
}

impl SetupError {
    /// Wrap an IO error with the headline to show and the path involved.
    pub fn io(context: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SetupError::Io {
            context: context.into(),
            path: path.into(),
            source,
        }
    }

    /// The `❌` line shown to the user.
    pub fn headline(&self) -> String {
        match self {
            SetupError::UnsupportedNode { required, .. }
            | SetupError::NodeVersionUnreadable { required, .. } => {
                format!("Node.js version {required} or higher is required.")
            }
            SetupError::CommandFailed { context, .. }
            | SetupError::CommandUnavailable { context, .. }
            | SetupError::Io { context, .. } => context.clone(),
            SetupError::Verification(message) => message.clone(),
            SetupError::Manifest { .. } | SetupError::Prompt(_) => GENERIC_HEADLINE.to_string(),
        }
    }

    /// Underlying diagnostic printed below the headline, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            SetupError::UnsupportedNode { found, .. } => Some(format!("Found {found}")),
            SetupError::NodeVersionUnreadable { reason, .. } => Some(reason.clone()),
            SetupError::CommandFailed {
                command, status, ..
            } => Some(format!("Command failed: {command} ({status})")),
            SetupError::CommandUnavailable {
                program, source, ..
            } => Some(format!("{program}: {source}")),
            SetupError::Io { path, source, .. } => {
                Some(format!("{}: {source}", path.display()))
            }
            SetupError::Manifest { path, message } => {
                Some(format!("{}: {message}", path.display()))
            }
            SetupError::Prompt(err) => Some(err.to_string()),
            SetupError::Verification(_) => None,
        }
    }

    /// External command failures carry secondary diagnostics; everything
    /// else is printed as part of the error itself.
    pub fn detail_is_secondary(&self) -> bool {
        matches!(
            self,
            SetupError::CommandFailed { .. } | SetupError::CommandUnavailable { .. }
        )
    }
}
