use std::path::{Path, PathBuf};

/// A working tree carries a `.git` directory, or a `.git` file for worktrees
/// and submodules.
#[must_use]
pub fn has_git_marker(dir: &Path) -> bool {
    dir.join(".git").exists()
}

pub trait FsOps {
    fn is_repo(&self, dir: &Path) -> bool;
    fn expand_tilde(&self, p: &Path) -> PathBuf;
}

pub struct DefaultFsOps;
impl FsOps for DefaultFsOps {
    fn is_repo(&self, dir: &Path) -> bool {
        has_git_marker(dir)
    }
    fn expand_tilde(&self, p: &Path) -> PathBuf {
        if let Some(home) = std::env::var_os("HOME") {
            let home = PathBuf::from(home);
            if p.starts_with("~")
                && let Ok(rest) = p.strip_prefix("~")
            {
                return home.join(rest);
            }
        }
        p.to_path_buf()
    }
}
