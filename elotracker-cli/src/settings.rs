//! Settings file (`~/.config/elotracker/settings.toml`) and path resolution.
//!
//! Every key is optional. A value given on the command line wins over the
//! settings file, which wins over the built-in default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use elotracker_import::context::DEFAULT_NEW_LAYOUT_MIN_COLUMNS;

use crate::error::CliError;

/// Canonical path to the settings file: `~/.config/elotracker/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("elotracker").join("settings.toml")
}

fn default_root() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("elotracker")
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub store: StoreSettings,
    pub inputs: InputSettings,
    pub delimited: DelimitedSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StoreSettings {
    /// Primary partitions, one `<name>.db` each.
    pub data_dir: PathBuf,
    pub replica_dir: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            data_dir: default_root().join("data"),
            replica_dir: default_root().join("replicas"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct InputSettings {
    pub fide_supplements: PathBuf,
    pub uscf_supplements: PathBuf,
    pub uscf_rating_lists: PathBuf,
    pub uscf_events: PathBuf,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            fide_supplements: PathBuf::from("./fide_supplements"),
            uscf_supplements: PathBuf::from("./uscf_supplements"),
            uscf_rating_lists: PathBuf::from("./golden_uscf_supplements"),
            uscf_events: PathBuf::from("uscf_crawl/uscf.jsonlines"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct DelimitedSettings {
    /// Field count at or above which a golden-list line uses the new layout.
    pub new_layout_min_columns: usize,
}

impl Default for DelimitedSettings {
    fn default() -> Self {
        Self {
            new_layout_min_columns: DEFAULT_NEW_LAYOUT_MIN_COLUMNS,
        }
    }
}

impl Settings {
    pub(crate) fn from_toml(contents: &str) -> Result<Self, CliError> {
        toml::from_str(contents).map_err(|e| CliError::config(e.to_string()))
    }

    /// Load settings from `path`.
    ///
    /// A missing file gives the defaults unless `required` is set, which is
    /// the case for a file named with `--config`.
    pub(crate) fn load(path: &Path, required: bool) -> Result<Self, CliError> {
        if !path.exists() {
            if required {
                return Err(CliError::config(format!(
                    "settings file {} not found",
                    path.display()
                )));
            }
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
    }

    /// Apply command-line overrides.
    pub(crate) fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.store.data_dir = dir;
        }
        self
    }

    pub(crate) fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            [store]
            data_dir = "/srv/elotracker/data"

            [delimited]
            new_layout_min_columns = 21
            "#,
        )
        .unwrap();
        assert_eq!(settings.store.data_dir, PathBuf::from("/srv/elotracker/data"));
        assert_eq!(settings.store.replica_dir, StoreSettings::default().replica_dir);
        assert_eq!(settings.inputs, InputSettings::default());
        assert_eq!(settings.delimited.new_layout_min_columns, 21);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let err = Settings::from_toml("[store\ndata_dir = 1").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn missing_file_is_only_an_error_when_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        assert_eq!(Settings::load(&path, false).unwrap(), Settings::default());
        assert!(Settings::load(&path, true).is_err());
    }

    #[test]
    fn flag_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[store]\ndata_dir = \"/from/file\"\n").unwrap();

        let settings = Settings::load(&path, true).unwrap();
        assert_eq!(settings.store.data_dir, PathBuf::from("/from/file"));
        let settings = settings.with_data_dir(Some(PathBuf::from("/from/flag")));
        assert_eq!(settings.store.data_dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn shown_settings_parse_back() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }
}
