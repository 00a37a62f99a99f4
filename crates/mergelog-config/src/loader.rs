//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "mergelog.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    Ok(config)
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found, but
/// never above `root`. A `start_dir` outside `root` is searched alone.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config_from(
    start_dir: impl AsRef<Path>,
    root: impl AsRef<Path>,
) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();
    let root = root.as_ref();
    let mut dir = start_dir;

    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return load_config(config_path);
        }

        if dir == root || !dir.starts_with(root) {
            break;
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME)))
}

/// Loads configuration like [`find_and_load_config_from`], falling back to
/// defaults when no file exists.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be used.
pub fn load_or_default(
    start_dir: impl AsRef<Path>,
    root: impl AsRef<Path>,
) -> ConfigResult<Config> {
    match find_and_load_config_from(start_dir, root) {
        Err(ConfigError::NotFound(path)) => {
            debug!(?path, "no configuration file, using defaults");
            Ok(Config::default())
        }
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_name() {
        assert_eq!(CONFIG_FILE_NAME, "mergelog.toml");
    }

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/mergelog.toml");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert!(path.to_string_lossy().contains("mergelog.toml"));
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_config_valid() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"
            [changelog]
            output = "HISTORY.md"
        "#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelog.output, "HISTORY.md");
    }

    #[test]
    fn test_load_config_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::InvalidToml(_))));
    }

    #[test]
    fn test_load_config_invalid_value() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[git]\nremote = \"\"\n").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_find_and_load_config_in_parent() {
        let parent_dir = TempDir::new().unwrap();
        fs::write(
            parent_dir.path().join(CONFIG_FILE_NAME),
            "[git]\nremote = \"upstream\"\n",
        )
        .unwrap();

        let child_dir = parent_dir.path().join("subdir");
        fs::create_dir(&child_dir).unwrap();

        let config = find_and_load_config_from(&child_dir, parent_dir.path()).unwrap();
        assert_eq!(config.git.remote, "upstream");
    }

    #[test]
    fn test_find_and_load_config_stops_at_root() {
        let outer_dir = TempDir::new().unwrap();
        fs::write(
            outer_dir.path().join(CONFIG_FILE_NAME),
            "[git]\nprogram = \"/tmp/not-git\"\n",
        )
        .unwrap();

        let root = outer_dir.path().join("repo");
        let child_dir = root.join("docs");
        fs::create_dir_all(&child_dir).unwrap();

        let result = find_and_load_config_from(&child_dir, &root);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_find_and_load_config_outside_root() {
        let temp_dir = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert!(find_and_load_config_from(temp_dir.path(), other.path()).is_ok());
        assert!(matches!(
            find_and_load_config_from(other.path(), temp_dir.path()),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();

        let config = load_or_default(temp_dir.path(), temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_ignores_config_above_root() {
        let outer_dir = TempDir::new().unwrap();
        fs::write(
            outer_dir.path().join(CONFIG_FILE_NAME),
            "[changelog]\noutput = \"ELSEWHERE.md\"\n",
        )
        .unwrap();

        let root = outer_dir.path().join("repo");
        fs::create_dir(&root).unwrap();

        let config = load_or_default(&root, &root).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_propagates_errors() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "[[[").unwrap();

        let result = load_or_default(temp_dir.path(), temp_dir.path());
        assert!(result.is_err());
    }
}
