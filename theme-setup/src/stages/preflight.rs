//! Runtime preflight: refuse to touch anything on an unsupported Node.js.

use regex::Regex;
use tracing::{debug, info};

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::process::{CommandRunner, Invocation};

fn node_version_regex() -> &'static Regex {
    use std::sync::OnceLock;
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^v?(\d+)(?:\.\d+)*").expect("valid regex"))
}

/// Extract the major number from `node --version` output such as `v18.17.0`.
pub fn parse_node_major(version: &str) -> Option<u32> {
    node_version_regex()
        .captures(version.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Check that the installed Node.js meets the configured minimum.
pub fn check_node_version(
    config: &SetupConfig,
    runner: &dyn CommandRunner,
) -> Result<u32, SetupError> {
    let required = config.min_node_major;
    let invocation = Invocation::new(&config.tools.node, ["--version"], &config.target_dir);

    let raw = runner
        .capture(&invocation, "Failed to determine Node.js version")
        .map_err(|e| SetupError::NodeVersionUnreadable {
            required,
            reason: e.to_string(),
        })?;
    let found = raw.trim().to_string();
    debug!(version = %found, "node --version");

    let major = parse_node_major(&found).ok_or_else(|| SetupError::NodeVersionUnreadable {
        required,
        reason: format!("unrecognised version string {found:?}"),
    })?;

    if major < required {
        return Err(SetupError::UnsupportedNode { required, found });
    }

    info!(major, "node version supported");
    Ok(major)
}
