pub mod paths;

pub use paths::resolve_templates_dir;

use std::path::{Path, PathBuf};

/// Lowest Node.js major version the tooling supports.
pub const MIN_NODE_MAJOR: u32 = 14;

/// Names of the external tools the setup shells out to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tools {
    pub node: String,
    pub npm: String,
    pub npx: String,
    pub git: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            node: "node".into(),
            npm: "npm".into(),
            npx: "npx".into(),
            git: "git".into(),
        }
    }
}

/// Everything a setup run needs, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct SetupConfig {
    /// Directory being bootstrapped.
    pub target_dir: PathBuf,
    /// Directory holding the bundled template files.
    pub templates_dir: PathBuf,
    pub tools: Tools,
    pub min_node_major: u32,
}

impl SetupConfig {
    pub fn new(target_dir: impl Into<PathBuf>, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            templates_dir: templates_dir.into(),
            tools: Tools::default(),
            min_node_major: MIN_NODE_MAJOR,
        }
    }

    /// Path inside the target directory.
    pub fn target(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.target_dir.join(relative)
    }

    /// Path inside the template directory.
    pub fn template(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.templates_dir.join(relative)
    }
}
