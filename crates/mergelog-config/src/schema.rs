//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Git configuration.
    #[serde(default)]
    pub git: GitConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.changelog.output.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "changelog.output must not be empty".to_string(),
            ));
        }
        if self.git.program.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "git.program must not be empty".to_string(),
            ));
        }
        if self.git.remote.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "git.remote must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Changelog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangelogConfig {
    /// Output file path, relative to the repository root.
    #[serde(default = "default_changelog_output")]
    pub output: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            output: default_changelog_output(),
        }
    }
}

fn default_changelog_output() -> String {
    "CHANGELOG.md".to_string()
}

/// Git configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    /// Git program to run.
    #[serde(default = "default_git_program")]
    pub program: String,

    /// Remote whose URL the links are built from.
    #[serde(default = "default_git_remote")]
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_git_program(),
            remote: default_git_remote(),
        }
    }
}

// Mirrors the git crate's `DEFAULT_PROGRAM` and `DEFAULT_REMOTE`; this crate
// stays free of git dependencies.
fn default_git_program() -> String {
    "git".to_string()
}

fn default_git_remote() -> String {
    "origin".to_string()
}
