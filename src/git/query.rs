use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::VcsError;
use crate::system::has_git_marker;

use super::GitRunner;
use super::probe::{ToolStatus, probe};

pub const DEFAULT_TAG_PATTERN: &str = "v*";

/// Read-only questions about a working tree, answered by shelling out to `git`.
pub struct VcsQuery<'g> {
    git: &'g dyn GitRunner,
    tag_pattern: String,
}

impl<'g> VcsQuery<'g> {
    #[must_use]
    pub fn new(git: &'g dyn GitRunner) -> Self {
        Self {
            git,
            tag_pattern: DEFAULT_TAG_PATTERN.to_string(),
        }
    }

    /// Use `pattern` instead of `v*` when listing version tags.
    #[must_use]
    pub fn with_tag_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.tag_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn tag_pattern(&self) -> &str {
        &self.tag_pattern
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn is_repository(&self, path: &Path) -> bool {
        has_git_marker(path)
    }

    #[must_use]
    pub fn probe_tool(&self) -> ToolStatus {
        probe(self.git)
    }

    #[must_use]
    pub fn is_tool_available(&self) -> bool {
        self.probe_tool().is_available()
    }

    /// Full hash of `HEAD`.
    ///
    /// # Errors
    /// Fails when `git` is missing or exits non-zero (not a repository, no commits).
    pub fn head_revision(&self, path: &Path) -> Result<String, VcsError> {
        let out = self.run_checked(path, &["rev-parse", "HEAD"])?;
        Ok(out.trim().to_string())
    }

    /// Whether tracked files have uncommitted changes. Untracked files are ignored.
    ///
    /// # Errors
    /// Fails when `git` is missing or exits non-zero.
    pub fn is_dirty(&self, path: &Path) -> Result<bool, VcsError> {
        let out = self.run_checked(path, &["status", "-uno", "--porcelain"])?;
        Ok(!out.trim().is_empty())
    }

    /// Highest tag matching the tag pattern under version ordering, so `v1.10.0`
    /// wins over `v1.2.0`. `None` when no tag matches.
    ///
    /// # Errors
    /// Fails when `git` is missing or exits non-zero.
    pub fn latest_version_tag(&self, path: &Path) -> Result<Option<String>, VcsError> {
        let list_arg = self.tag_pattern.as_str();
        let out = self.run_checked(
            path,
            &["tag", "--sort=-version:refname", "--list", list_arg],
        )?;
        let first = out.lines().next().unwrap_or_default().trim();
        if first.is_empty() {
            Ok(None)
        } else {
            Ok(Some(first.to_string()))
        }
    }

    /// Number of commits reachable from `HEAD` but not from the latest version tag.
    /// Zero when there is no version tag.
    ///
    /// # Errors
    /// Fails when either `git` invocation fails or the count cannot be parsed.
    pub fn dev_distance(&self, path: &Path) -> Result<u64, VcsError> {
        let tag = self.latest_version_tag(path)?;
        self.distance_since(path, tag.as_deref())
    }

    /// Number of commits reachable from `HEAD` but not from `tag`. Zero for `None`,
    /// without running `git`.
    ///
    /// # Errors
    /// Fails when `git rev-list` fails or its count cannot be parsed.
    pub fn distance_since(&self, path: &Path, tag: Option<&str>) -> Result<u64, VcsError> {
        let Some(tag) = tag else {
            debug!("no version tag in {}, distance is 0", path.display());
            return Ok(0);
        };
        let range = format!("{tag}..HEAD");
        let out = self.run_checked(path, &["rev-list", "--count", &range])?;
        let value = out.trim();
        value.parse::<u64>().map_err(|source| VcsError::ParseCount {
            value: value.to_string(),
            source,
        })
    }

    /// `base+dev.<head>` with a `.dirty` suffix for modified trees. Returns `base`
    /// unchanged when `path` is not a repository or `git` cannot be run.
    ///
    /// # Errors
    /// Fails when `git` is available but the revision or status query fails.
    pub fn dev_version(&self, path: &Path, base: &str) -> Result<String, VcsError> {
        if !self.is_repository(path) || !self.is_tool_available() {
            return Ok(base.to_string());
        }
        let head = self.head_revision(path)?;
        let dirty = self.is_dirty(path)?;
        Ok(format_dev_version(base, &head, dirty))
    }

    fn run_checked(&self, path: &Path, args: &[&str]) -> Result<String, VcsError> {
        let out = self.git.run_git(Some(path), args).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                VcsError::ToolNotFound {
                    program: self.git.program(),
                }
            } else {
                VcsError::CommandIo {
                    args: args.join(" "),
                    source,
                }
            }
        })?;
        if !out.status.success() {
            return Err(VcsError::CommandFailure {
                args: args.join(" "),
                status: out.status,
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

pub(crate) fn format_dev_version(base: &str, head: &str, dirty: bool) -> String {
    if dirty {
        format!("{base}+dev.{head}.dirty")
    } else {
        format!("{base}+dev.{head}")
    }
}
