#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

mod config;
mod error;
mod git;
mod report;
mod scan;
mod system;
mod types;
pub mod output;

pub use config::{Config, load_config};
pub use error::VcsError;
pub use git::{DEFAULT_TAG_PATTERN, DefaultGitRunner, GitRunner, ToolStatus, VcsQuery};
pub use report::collect_report_data;
pub use scan::find_repos;
pub use system::{DefaultFsOps, FsOps, has_git_marker};
pub use types::{Options, RepoSummary, ReportData};
