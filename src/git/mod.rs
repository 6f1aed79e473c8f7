mod probe;
mod query;
mod runner;

#[cfg(all(test, unix))]
pub(crate) mod fake;

pub use probe::ToolStatus;
pub use query::{DEFAULT_TAG_PATTERN, VcsQuery};
pub(crate) use query::format_dev_version;
pub use runner::{DefaultGitRunner, GitRunner};
