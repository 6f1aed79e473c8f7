use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::VcsError;

/// Settings read from a TOML file. Every key is optional; command-line flags
/// take precedence over whatever is set here.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub git_binary: Option<PathBuf>,
    pub tag_pattern: Option<String>,
    pub depth: Option<usize>,
    #[serde(default)]
    pub roots: Vec<PathBuf>,
}

/// Read and parse the config file at `path`.
///
/// # Errors
/// Returns an error when the file cannot be read or is not valid config TOML.
pub fn load_config(path: &Path) -> Result<Config, VcsError> {
    let config_text = std::fs::read_to_string(path).map_err(|source| VcsError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&config_text).map_err(|source| VcsError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn load_config_reads_kebab_case_keys() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("vcsq.toml");
        fs::write(
            &path,
            "git-binary = \"/opt/git/bin/git\"\ntag-pattern = \"release-*\"\ndepth = 2\nroots = [\"~/src\", \"/work\"]\n",
        )
        .expect("write config");

        let config = load_config(&path).expect("config");
        assert_eq!(config.git_binary, Some(PathBuf::from("/opt/git/bin/git")));
        assert_eq!(config.tag_pattern.as_deref(), Some("release-*"));
        assert_eq!(config.depth, Some(2));
        assert_eq!(
            config.roots,
            vec![PathBuf::from("~/src"), PathBuf::from("/work")]
        );
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("vcsq.toml");
        fs::write(&path, "").expect("write config");
        assert_eq!(load_config(&path).expect("config"), Config::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("vcsq.toml");
        fs::write(&path, "tag_pattern = \"v*\"\n").expect("write config");
        let err = load_config(&path).expect_err("should fail");
        assert!(matches!(err, VcsError::ConfigParse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let temp = tempdir().expect("tempdir");
        let err = load_config(&temp.path().join("absent.toml")).expect_err("should fail");
        assert!(matches!(err, VcsError::ConfigRead { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
