#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Toolchain configuration for lytc
//!
//! This crate reads the package list and derives the paths and download URLs
//! the cross-toolchain build scripts consume. Settings are merged from:
//! - Default values (hard-coded)
//! - Settings file (~/.config/lytc/config.toml)
//! - Environment variables
//! - CLI flags

pub mod constants;
pub mod exports;
pub mod package_list;
pub mod resolver;
pub mod settings;

pub use exports::Exports;
pub use package_list::{load_package_list, PackageList};
pub use resolver::{
    configured_paths, derive_package_info, resolve_paths, resolve_paths_from_cwd, Toolchain,
};
pub use settings::{GeneralConfig, PathConfig, ToolchainConfig};

use constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENV_COLOR, ENV_OUTPUT, ENV_PACKAGE_LIST, ENV_PROFILE,
    ENV_ROOT, ENV_TARGET,
};
use lytc_errors::{ConfigError, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default)]
    pub paths: PathConfig,
}

impl Config {
    /// Get the default settings file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load settings from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&contents).map_err(Into::into)
    }

    /// Load settings with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load settings from an optional path or use default
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load(),
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a `LYTC_*` variable holds an invalid value.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        self.merge_vars(|name| std::env::var(name).ok())
    }

    /// Merge values from `lookup`, keyed by `LYTC_*` variable name
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the variable for any value
    /// that does not parse.
    pub fn merge_vars<F>(&mut self, lookup: F) -> Result<(), Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let invalid = |field: &str, value: String| ConfigError::InvalidValue {
            field: field.to_string(),
            value,
        };

        if let Some(output) = lookup(ENV_OUTPUT) {
            self.general.default_output =
                output.parse().map_err(|_| invalid(ENV_OUTPUT, output))?;
        }

        if let Some(color) = lookup(ENV_COLOR) {
            self.general.color = color.parse().map_err(|_| invalid(ENV_COLOR, color))?;
        }

        if let Some(profile) = lookup(ENV_PROFILE) {
            self.toolchain.profile = profile.parse().map_err(|_| invalid(ENV_PROFILE, profile))?;
        }

        if let Some(target) = lookup(ENV_TARGET) {
            if target.is_empty() {
                return Err(invalid(ENV_TARGET, target).into());
            }
            self.toolchain.target = target;
        }

        if let Some(list) = lookup(ENV_PACKAGE_LIST) {
            self.toolchain.package_list = PathBuf::from(list);
        }

        if let Some(root) = lookup(ENV_ROOT) {
            self.paths.root = Some(PathBuf::from(root));
        }

        Ok(())
    }

    /// Toolchain root: the configured path, else the working directory
    ///
    /// A relative configured root is taken from the working directory, so
    /// the result is always absolute.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the working directory cannot be determined.
    pub fn root(&self) -> Result<PathBuf, Error> {
        match &self.paths.root {
            Some(root) => Ok(std::path::absolute(root)?),
            None => resolver::working_dir(),
        }
    }

    /// Location of the package list for `root`
    #[must_use]
    pub fn package_list_path(&self, root: &Path) -> PathBuf {
        if self.toolchain.package_list.is_absolute() {
            self.toolchain.package_list.clone()
        } else {
            root.join(&self.toolchain.package_list)
        }
    }

    /// Write the settings to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: parent.display().to_string(),
                error: e.to_string(),
            })?;
        }
        std::fs::write(path, contents).map_err(|e| ConfigError::WriteError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Ok(())
    }
}
