use std::cell::RefCell;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use super::GitRunner;

enum Reply {
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    SpawnError(ErrorKind),
}

/// Scripted `git`: replies are keyed by the space-joined argument list.
/// Unscripted invocations exit 1 with a diagnostic on stderr.
#[derive(Default)]
pub(crate) struct FakeGitRunner {
    replies: HashMap<String, Reply>,
    calls: RefCell<Vec<(Option<PathBuf>, String)>>,
}

impl FakeGitRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, args: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.replies.insert(
            args.to_string(),
            Reply::Exit {
                code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    pub(crate) fn fail(mut self, args: &str, kind: ErrorKind) -> Self {
        self.replies.insert(args.to_string(), Reply::SpawnError(kind));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, a)| a.clone()).collect()
    }

    pub(crate) fn cwds(&self) -> Vec<Option<PathBuf>> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }
}

impl GitRunner for FakeGitRunner {
    fn run_git(&self, cwd: Option<&Path>, args: &[&str]) -> std::io::Result<Output> {
        let key = args.join(" ");
        self.calls
            .borrow_mut()
            .push((cwd.map(Path::to_path_buf), key.clone()));
        match self.replies.get(&key) {
            Some(Reply::Exit {
                code,
                stdout,
                stderr,
            }) => Ok(Output {
                status: ExitStatus::from_raw(code << 8),
                stdout: stdout.clone().into_bytes(),
                stderr: stderr.clone().into_bytes(),
            }),
            Some(Reply::SpawnError(kind)) => Err(std::io::Error::from(*kind)),
            None => Ok(Output {
                status: ExitStatus::from_raw(1 << 8),
                stdout: Vec::new(),
                stderr: format!("fake git: unscripted `{key}`").into_bytes(),
            }),
        }
    }
}
