// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result as FmtResult},
          fs,
          io::ErrorKind,
          path::{Path, PathBuf}};

use dirs::home_dir;
use miette::Diagnostic;
use serde::Deserialize;

pub const DEFAULT_MAX_LIST_HEIGHT: u16 = 20;
pub const ENV_VAR_MAX_LIST_HEIGHT: &str = "GBL_MAX_LIST_HEIGHT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPaths {
    DefaultConfigFileName,
}

impl Display for ConfigPaths {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let path = match self {
            ConfigPaths::DefaultConfigFileName => ".gbl.yaml",
        };
        write!(f, "{path}")
    }
}

/// Contents of the optional YAML config file. Only the selection UI reads it; the git
/// layer never does.
///
/// ```yaml
/// max_list_height: 15
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GblConfig {
    /// Max number of rows the selection list shows at once.
    pub max_list_height: u16,
}

impl Default for GblConfig {
    fn default() -> Self {
        Self {
            max_list_height: DEFAULT_MAX_LIST_HEIGHT,
        }
    }
}

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    #[error("Could not read config file {}: {source}", .path.display())]
    #[diagnostic(code(gbl::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file {}: {source}", .path.display())]
    #[diagnostic(
        code(gbl::config::parse),
        help("The only supported key is `max_list_height`")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// `$HOME/.gbl.yaml`, if there is a home folder.
#[must_use]
pub fn try_get_default_config_file_path() -> Option<PathBuf> {
    let home_folder_path = home_dir()?;
    Some(home_folder_path.join(ConfigPaths::DefaultConfigFileName.to_string()))
}

/// Reads the config file at `path`. A missing file is not an error and gives `None`.
///
/// # Errors
///
/// Returns an error if the file exists but can't be read or isn't valid YAML for
/// [`GblConfig`].
pub fn try_read_config_file(path: &Path) -> Result<Option<GblConfig>, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    // An empty file is a valid "nothing configured".
    if text.trim().is_empty() {
        return Ok(Some(GblConfig::default()));
    }

    serde_yaml::from_str::<GblConfig>(&text)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Applies environment variable overrides on top of `config`. Values that don't parse
/// are ignored.
#[must_use]
pub fn apply_env_overrides(mut config: GblConfig) -> GblConfig {
    if let Ok(value) = std::env::var(ENV_VAR_MAX_LIST_HEIGHT) {
        match value.trim().parse::<u16>() {
            Ok(height) => config.max_list_height = height,
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Ignoring invalid env var",
                    name = ENV_VAR_MAX_LIST_HEIGHT,
                    value = %value,
                    error = %error
                );
            }
        }
    }
    config
}

/// Resolves the config in this order: the explicit `maybe_path` (or the default path),
/// then env var overrides. Returns the path of the file that was used, if any.
///
/// # Errors
///
/// See [`try_read_config_file`].
pub fn try_load_config(
    maybe_path: Option<&Path>,
) -> Result<(GblConfig, Option<PathBuf>), ConfigError> {
    let maybe_path = maybe_path
        .map(Path::to_path_buf)
        .or_else(try_get_default_config_file_path);

    let (config, used_path) = match maybe_path {
        Some(path) => match try_read_config_file(&path)? {
            Some(config) => (config, Some(path)),
            None => (GblConfig::default(), None),
        },
        None => (GblConfig::default(), None),
    };

    tracing::debug!(message = "Loaded config", config = ?config, path = ?used_path);

    Ok((apply_env_overrides(config), used_path))
}

#[cfg(test)]
mod tests_config {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nope.yaml");
        assert!(try_read_config_file(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_valid_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".gbl.yaml");
        fs::write(&path, "max_list_height: 12\n").unwrap();

        assert_eq!(
            try_read_config_file(&path).unwrap(),
            Some(GblConfig {
                max_list_height: 12
            })
        );
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".gbl.yaml");
        fs::write(&path, "\n").unwrap();

        assert_eq!(
            try_read_config_file(&path).unwrap(),
            Some(GblConfig::default())
        );
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".gbl.yaml");
        fs::write(&path, "colour: purple\n").unwrap();

        let error = try_read_config_file(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
        assert!(error.to_string().contains(".gbl.yaml"));
    }

    #[test]
    #[serial]
    fn test_load_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        fs::write(&path, "max_list_height: 5\n").unwrap();

        // SAFETY: Tests that touch env vars are serialized.
        unsafe { std::env::remove_var(ENV_VAR_MAX_LIST_HEIGHT) };

        let (config, used_path) = try_load_config(Some(&path)).unwrap();
        assert_eq!(config.max_list_height, 5);
        assert_eq!(used_path, Some(path));
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_file_value() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        fs::write(&path, "max_list_height: 5\n").unwrap();

        // SAFETY: Tests that touch env vars are serialized.
        unsafe { std::env::set_var(ENV_VAR_MAX_LIST_HEIGHT, "9") };
        let (config, _) = try_load_config(Some(&path)).unwrap();
        assert_eq!(config.max_list_height, 9);

        // SAFETY: Tests that touch env vars are serialized.
        unsafe { std::env::set_var(ENV_VAR_MAX_LIST_HEIGHT, "tall") };
        let (config, _) = try_load_config(Some(&path)).unwrap();
        assert_eq!(config.max_list_height, 5);

        // SAFETY: Tests that touch env vars are serialized.
        unsafe { std::env::remove_var(ENV_VAR_MAX_LIST_HEIGHT) };
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = try_get_default_config_file_path() {
            assert!(path.ends_with(".gbl.yaml"));
        }
    }
}
