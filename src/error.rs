use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug)]
pub enum VcsError {
    ToolNotFound {
        program: String,
    },
    CommandIo {
        args: String,
        source: std::io::Error,
    },
    CommandFailure {
        args: String,
        status: ExitStatus,
        stderr: String,
    },
    ParseCount {
        value: String,
        source: std::num::ParseIntError,
    },
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for VcsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToolNotFound { program } => {
                write!(f, "git executable '{program}' not found on PATH")
            }
            Self::CommandIo { args, source } => {
                write!(f, "failed to launch `git {args}`: {source}")
            }
            Self::CommandFailure {
                args,
                status,
                stderr,
            } => {
                if stderr.is_empty() {
                    write!(f, "`git {args}` failed with status {status}")
                } else {
                    write!(f, "`git {args}` failed with status {status}: {stderr}")
                }
            }
            Self::ParseCount { value, source } => {
                write!(f, "unexpected commit count '{value}': {source}")
            }
            Self::ConfigRead { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(f, "failed to parse config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for VcsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CommandIo { source, .. } | Self::ConfigRead { source, .. } => Some(source),
            Self::ParseCount { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::ToolNotFound { .. } | Self::CommandFailure { .. } => None,
        }
    }
}
