//! Test doubles for the command runner, the confirmation prompt and the
//! console.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::rc::Rc;

use crate::error::SetupError;
use crate::output::Console;
use crate::process::{CommandRunner, Invocation};
use crate::prompt::{is_affirmative, Confirm};
use crate::stages::templates::{CONFIG_FILES, PRE_COMMIT_HOOK};

/// Records invocations instead of running them.
///
/// With [`FakeRunner::simulating_tools`] it also reproduces the on-disk side
/// effects the real tools have on the target directory.
pub struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    fail_on: Option<String>,
    node_version: String,
    simulate: bool,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
            node_version: "v18.17.0".into(),
            simulate: false,
        }
    }

    pub fn with_node_version(mut self, version: &str) -> Self {
        self.node_version = version.into();
        self
    }

    /// Make the command whose display form equals `command` exit non-zero.
    pub fn failing(mut self, command: &str) -> Self {
        self.fail_on = Some(command.into());
        self
    }

    pub fn simulating_tools(mut self) -> Self {
        self.simulate = true;
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }

    fn record(&self, invocation: &Invocation, context: &str) -> Result<(), SetupError> {
        self.calls.borrow_mut().push(invocation.clone());
        let command = invocation.to_string();
        if self.fail_on.as_deref() == Some(command.as_str()) {
            return Err(SetupError::CommandFailed {
                context: context.to_string(),
                command,
                status: "exit status: 1".into(),
            });
        }
        Ok(())
    }

    fn simulate(&self, invocation: &Invocation) {
        let dir = &invocation.cwd;
        let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
        match (invocation.program.as_str(), args.as_slice()) {
            ("npm", ["init", "-y"]) => {
                fs::write(
                    dir.join("package.json"),
                    "{\n  \"name\": \"theme\",\n  \"version\": \"1.0.0\",\n  \"description\": \"\",\n  \"main\": \"index.js\",\n  \"scripts\": {\n    \"test\": \"echo \\\"Error: no test specified\\\" && exit 1\"\n  },\n  \"keywords\": [],\n  \"author\": \"\",\n  \"license\": \"ISC\"\n}\n",
                )
                .unwrap();
            }
            ("git", ["init"]) => fs::create_dir_all(dir.join(".git")).unwrap(),
            ("npm", ["install", "--save-dev", packages @ ..]) => {
                for package in packages {
                    fs::create_dir_all(dir.join("node_modules").join(package)).unwrap();
                }
            }
            ("npx", ["husky-init"]) => {
                fs::create_dir_all(dir.join(".husky")).unwrap();
                fs::write(dir.join(".husky").join("pre-commit"), "npm test\n").unwrap();
            }
            _ => {}
        }
    }
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, invocation: &Invocation, context: &str) -> Result<(), SetupError> {
        self.record(invocation, context)?;
        if self.simulate {
            self.simulate(invocation);
        }
        Ok(())
    }

    fn capture(&self, invocation: &Invocation, context: &str) -> Result<String, SetupError> {
        self.record(invocation, context)?;
        Ok(format!("{}\n", self.node_version))
    }
}

/// Answers every prompt with a fixed line of input.
pub struct ScriptedConfirm {
    answer: String,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.into(),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool, SetupError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(is_affirmative(&self.answer))
    }
}

/// Populate `dir` with a distinct template for every table entry.
pub fn write_templates(dir: &Path) {
    for file in CONFIG_FILES.iter().chain(std::iter::once(&PRE_COMMIT_HOOK)) {
        let path = dir.join(file.template);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("template for {}\n", file.target)).unwrap();
    }
}

/// In-memory writer whose contents stay readable after it is handed to a
/// [`Console`].
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console that discards everything.
pub fn quiet() -> Console {
    Console::new(io::sink(), false)
}
