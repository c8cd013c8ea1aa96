//! Application settings
//!
//! This module contains the settings model and its YAML loading. The output
//! root is the only piece of configuration the generator consumes, and it is
//! passed into the creation loop explicitly rather than read from ambient
//! process state.

use std::fs;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use shellexpand::tilde;

use crate::constants::{APPLICATION, DEFAULT_OUTPUT_ROOT, ORGANIZATION, QUALIFIER};

/// Settings for the document generator
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Directory that generated files are written into
    pub output_root: PathBuf,
}

/// On-disk shape of the settings file
#[derive(Deserialize, Debug)]
struct RawSettings {
    output_root: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
        }
    }
}

impl Settings {
    /// Loads settings from a YAML file
    ///
    /// A `~` prefix in the output root is expanded to the home directory.
    ///
    /// # Arguments
    /// * `file` - Path to the settings file
    ///
    /// # Returns
    /// * `Result<Settings>` - The loaded settings or an error
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load(file: &Path) -> Result<Settings> {
        let content = fs::read_to_string(file)
            .map_err(|e| anyhow!("Failed to read settings file {}: {}", file.display(), e))?;

        let raw: RawSettings = serde_yaml::from_str(&content).map_err(|e| {
            anyhow!(
                "Failed to parse settings file {}: {}\nPlease check the YAML syntax.",
                file.display(),
                e
            )
        })?;

        let output_root = match raw.output_root {
            Some(root) if !root.trim().is_empty() => PathBuf::from(tilde(&root).to_string()),
            _ => PathBuf::from(DEFAULT_OUTPUT_ROOT),
        };

        Ok(Settings { output_root })
    }

    /// Loads settings from a file when it exists, falling back to defaults
    ///
    /// Running without a settings file is the common case; only a present
    /// but malformed file is an error.
    pub fn load_or_default(file: &Path) -> Result<Settings> {
        if file.exists() {
            Settings::load(file)
        } else {
            Ok(Settings::default())
        }
    }
}

/// Finds the platform config directory for this application, creating it if needed
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir())?;
    }
    Ok(folder)
}
