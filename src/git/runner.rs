use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use log::debug;

pub trait GitRunner {
    /// Run `git` with `args`, inside `cwd` when one is given.
    ///
    /// # Errors
    /// Returns an error if the `git` process cannot be spawned or fails during execution.
    fn run_git(&self, cwd: Option<&Path>, args: &[&str]) -> std::io::Result<Output>;

    /// Name of the executable, used in diagnostics.
    fn program(&self) -> String {
        "git".to_string()
    }
}

pub struct DefaultGitRunner {
    program: OsString,
}

impl DefaultGitRunner {
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DefaultGitRunner {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for DefaultGitRunner {
    fn run_git(&self, cwd: Option<&Path>, args: &[&str]) -> std::io::Result<Output> {
        let mut cmd = Command::new(&self.program);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        debug!(
            "running {} {} in {}",
            self.program.to_string_lossy(),
            args.join(" "),
            cwd.map_or_else(|| ".".to_string(), |d| d.display().to_string())
        );
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
    }

    fn program(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}
