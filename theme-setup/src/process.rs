//! External command execution.
//!
//! Every stage that shells out goes through [`CommandRunner`], so tests can
//! substitute a fake and assert on the exact invocations.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, instrument, warn};

use crate::error::SetupError;

/// A single external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external commands on behalf of the setup stages.
pub trait CommandRunner {
    /// Run with inherited stdio. `context` is the message reported if the
    /// command cannot be started or exits unsuccessfully.
    fn run(&self, invocation: &Invocation, context: &str) -> Result<(), SetupError>;

    /// Run and return captured stdout.
    fn capture(&self, invocation: &Invocation, context: &str) -> Result<String, SetupError>;
}

/// Runs commands on the host through `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(&self, invocation: &Invocation, context: &str) -> Result<Command, SetupError> {
        let program = which::which(&invocation.program).map_err(|source| {
            warn!(program = %invocation.program, "program not found on PATH");
            SetupError::CommandUnavailable {
                context: context.to_string(),
                program: invocation.program.clone(),
                source,
            }
        })?;

        let mut cmd = Command::new(program);
        cmd.args(&invocation.args).current_dir(&invocation.cwd);
        Ok(cmd)
    }
}

impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(command = %invocation, cwd = %invocation.cwd.display()))]
    fn run(&self, invocation: &Invocation, context: &str) -> Result<(), SetupError> {
        let mut cmd = self.command(invocation, context)?;
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!("spawning child process");
        let status = cmd
            .status()
            .map_err(|e| SetupError::io(context, &invocation.cwd, e))?;
        debug!(exit_code = ?status.code(), "command finished");

        if status.success() {
            Ok(())
        } else {
            Err(SetupError::CommandFailed {
                context: context.to_string(),
                command: invocation.to_string(),
                status: status.to_string(),
            })
        }
    }

    #[instrument(skip_all, fields(command = %invocation, cwd = %invocation.cwd.display()))]
    fn capture(&self, invocation: &Invocation, context: &str) -> Result<String, SetupError> {
        let mut cmd = self.command(invocation, context)?;
        cmd.stdin(Stdio::null()).stderr(Stdio::inherit());

        let output = cmd
            .output()
            .map_err(|e| SetupError::io(context, &invocation.cwd, e))?;
        debug!(exit_code = ?output.status.code(), "command finished");

        if !output.status.success() {
            return Err(SetupError::CommandFailed {
                context: context.to_string(),
                command: invocation.to_string(),
                status: output.status.to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
