use std::io::ErrorKind;
use std::process::ExitStatus;

use super::GitRunner;

/// Outcome of running `git --help` outside any repository.
///
/// Every variant other than [`ToolStatus::Available`] means the tool cannot be
/// used; callers that only care about that use [`ToolStatus::is_available`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    /// `git --help` exited with status zero.
    Available,
    /// The executable is not on the search path.
    NotFound,
    /// `git` ran but exited non-zero; `status` is its own exit status.
    Failed { status: ExitStatus },
    /// Spawning failed for a reason other than a missing executable.
    SpawnError { kind: ErrorKind },
}

impl ToolStatus {
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

pub(crate) fn probe(git: &dyn GitRunner) -> ToolStatus {
    match git.run_git(None, &["--help"]) {
        Ok(out) if out.status.success() => ToolStatus::Available,
        Ok(out) => ToolStatus::Failed { status: out.status },
        Err(err) if err.kind() == ErrorKind::NotFound => ToolStatus::NotFound,
        Err(err) => ToolStatus::SpawnError { kind: err.kind() },
    }
}
