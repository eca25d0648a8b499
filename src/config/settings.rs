//! Settings loading functionality
//!
//! This module contains the optional YAML settings file and its loader.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_yaml::from_str;

use crate::constants::{DEFAULT_DIRECTORY, DEFAULT_EXTENSIONS, DEFAULT_SPEC_FILE, EXTENSION_SEPARATOR};
use crate::errors::config_parsing_error;
use crate::transform::MatchMode;
use crate::utils::expand_path;

/// Settings for a batch run
///
/// Every field is optional in the YAML file:
///
/// ```yaml
/// directory: ~/Downloads/shows
/// spec: name-scheme.format
/// extensions: [".mkv", ".mp4"]
/// match_mode: lenient
/// overwrite: false
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory whose files are renamed
    #[serde(deserialize_with = "deserialize_expanded_path")]
    pub directory: PathBuf,
    /// Naming scheme file; relative paths are resolved against `directory`
    #[serde(deserialize_with = "deserialize_optional_expanded_path")]
    pub spec: Option<PathBuf>,
    /// File extensions (with leading dot) that are picked up
    pub extensions: Vec<String>,
    /// Whether literal text is verified while matching filenames
    pub match_mode: MatchMode,
    /// Replace files that already exist at the destination
    pub overwrite: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            spec: None,
            extensions: DEFAULT_EXTENSIONS.clone(),
            match_mode: MatchMode::default(),
            overwrite: false,
        }
    }
}

impl Settings {
    /// Resolves the naming scheme file location
    pub fn spec_path(&self) -> PathBuf {
        match &self.spec {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.directory.join(path),
            None => self.directory.join(DEFAULT_SPEC_FILE),
        }
    }

    /// Validates the settings
    ///
    /// # Errors
    /// Returns an error if the extension list is empty or an entry lacks its leading dot
    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(anyhow!("At least one file extension must be configured"));
        }

        if let Some(extension) = self
            .extensions
            .iter()
            .find(|ext| !ext.starts_with(EXTENSION_SEPARATOR) || ext.len() < 2)
        {
            return Err(anyhow!(
                "Invalid extension '{extension}': extensions must start with '{EXTENSION_SEPARATOR}'"
            ));
        }

        Ok(())
    }
}

/// Loads settings from a YAML file
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid YAML, or fails validation
pub fn load_settings(file: &Path) -> Result<Settings> {
    let content = fs::read_to_string(file)
        .map_err(|e| anyhow!("Failed to read settings file {}: {}", file.display(), e))?;

    let settings: Settings = from_str(&content).map_err(|e| {
        config_parsing_error(
            e,
            &format!(
                "{} is not a valid settings file. Please check the YAML syntax.",
                file.display()
            ),
        )
    })?;

    settings.validate()?;

    debug!("Loaded settings from {}: {settings:?}", file.display());

    Ok(settings)
}

/// Loads settings from `file` if given, otherwise returns the defaults
pub fn load_settings_or_default(file: Option<&Path>) -> Result<Settings> {
    match file {
        Some(path) => load_settings(path),
        None => Ok(Settings::default()),
    }
}

fn deserialize_expanded_path<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: String = Deserialize::deserialize(deserializer)?;
    Ok(expand_path(&raw))
}

fn deserialize_optional_expanded_path<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.as_deref().map(expand_path))
}
