// Fakes shared by the integration tests

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use dl::core::{CommandOutput, CommandRunner, CommandSpec};
use dl::platform::MountProbe;
use dl::Result;

/// Records every command and simulates `sudo mkdir` / `sudo mount`
#[derive(Default)]
pub struct FakeSystem {
    pub commands: RefCell<Vec<CommandSpec>>,
    mounts: RefCell<HashSet<PathBuf>>,
    failing: HashSet<String>,
}

impl FakeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` exit with status 1
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.insert(program.to_string());
        self
    }

    pub fn mounted(self, path: &Path) -> Self {
        self.mounts.borrow_mut().insert(path.to_path_buf());
        self
    }

    /// Commands rendered as strings, in execution order
    pub fn history(&self) -> Vec<String> {
        self.commands.borrow().iter().map(|c| c.to_string()).collect()
    }

    /// Name of the tool actually invoked, looking through `sudo`
    fn tool(spec: &CommandSpec) -> &str {
        if spec.program == "sudo" {
            spec.args.first().map(String::as_str).unwrap_or("")
        } else {
            spec.program.as_str()
        }
    }

    pub fn count(&self, tool: &str) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| Self::tool(c) == tool)
            .count()
    }
}

impl CommandRunner for FakeSystem {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        self.commands.borrow_mut().push(spec.clone());
        let tool = Self::tool(spec).to_string();

        if self.failing.contains(&tool) {
            return Ok(CommandOutput {
                status: Some(1),
                stdout: String::new(),
                stderr: format!("{}: simulated failure", tool),
            });
        }

        let target = spec.args.last().map(PathBuf::from);
        match (tool.as_str(), target) {
            ("mkdir", Some(dir)) => fs::create_dir_all(&dir)?,
            ("mount", Some(dir)) => {
                self.mounts.borrow_mut().insert(dir);
            }
            _ => {}
        }

        Ok(CommandOutput {
            status: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}

impl MountProbe for FakeSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_mount_point(&self, path: &Path) -> bool {
        self.mounts.borrow().contains(path)
    }
}
