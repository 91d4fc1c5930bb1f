use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::SiteCopyResult;
use crate::file::operations::check_root;

/// Environment variable consulted when no root is given on the command line
pub const ROOT_ENV_VAR: &str = "SITECOPY_ROOT";

/// Whether a run persists its edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Write edited pages back to disk
    #[default]
    Apply,
    /// Detect and report only
    Check,
}

impl RunMode {
    pub fn from_check_flag(check: bool) -> Self {
        if check {
            Self::Check
        } else {
            Self::Apply
        }
    }

    pub fn writes(self) -> bool {
        matches!(self, Self::Apply)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory the table's relative paths resolve against
    pub root: PathBuf,
    pub mode: RunMode,
    /// Exit non-zero from a check run that found pending edits
    pub fail_on_changes: bool,
    /// Print a unified diff for every edited page
    pub show_diff: bool,
}

impl RunConfig {
    pub fn new(root: impl Into<PathBuf>, mode: RunMode) -> Self {
        Self {
            root: root.into(),
            mode,
            fail_on_changes: false,
            show_diff: false,
        }
    }

    /// Resolves the project root: explicit flag, then `SITECOPY_ROOT`, then
    /// the current directory. The result must be an existing directory.
    pub fn resolve_root(flag: Option<PathBuf>, env_value: Option<String>) -> SiteCopyResult<PathBuf> {
        let root = match (flag, env_value) {
            (Some(path), _) => path,
            (None, Some(value)) if !value.trim().is_empty() => PathBuf::from(value),
            _ => std::env::current_dir()?,
        };
        check_root(&root)?;
        Ok(root)
    }

    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flag_wins_over_env() {
        let flag_dir = tempdir().unwrap();
        let env_dir = tempdir().unwrap();

        let root = RunConfig::resolve_root(
            Some(flag_dir.path().to_path_buf()),
            Some(env_dir.path().to_string_lossy().to_string()),
        )
        .unwrap();
        assert_eq!(root, flag_dir.path());
    }

    #[test]
    fn test_env_used_without_flag() {
        let env_dir = tempdir().unwrap();
        let root =
            RunConfig::resolve_root(None, Some(env_dir.path().to_string_lossy().to_string()))
                .unwrap();
        assert_eq!(root, env_dir.path());
    }

    #[test]
    fn test_blank_env_falls_back_to_current_dir() {
        let root = RunConfig::resolve_root(None, Some("  ".to_string())).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_missing_root_rejected() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(RunConfig::resolve_root(Some(missing), None).is_err());
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(RunMode::from_check_flag(true), RunMode::Check);
        assert_eq!(RunMode::from_check_flag(false), RunMode::Apply);
        assert!(RunMode::Apply.writes());
        assert!(!RunMode::Check.writes());
    }

    #[test]
    fn test_resolve_joins_root() {
        let config = RunConfig::new("/srv/site", RunMode::Apply);
        assert_eq!(
            config.resolve(Path::new("en/index.html")),
            PathBuf::from("/srv/site/en/index.html")
        );
    }
}
