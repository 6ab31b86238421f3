//! Settings sections and their defaults

use crate::constants::PACKAGE_LIST_FILE;
use lytc_types::{ColorChoice, OutputFormat, Profile, DEFAULT_TARGET};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    #[serde(default = "default_color_choice")]
    pub color: ColorChoice,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: OutputFormat::Tty,
            color: ColorChoice::Auto,
        }
    }
}

/// What gets resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainConfig {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default = "default_target")]
    pub target: String,
    /// Relative paths are taken from the toolchain root
    #[serde(default = "default_package_list")]
    pub package_list: PathBuf,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Full,
            target: DEFAULT_TARGET.to_string(),
            package_list: PathBuf::from(PACKAGE_LIST_FILE),
        }
    }
}

/// Path overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Toolchain root; the working directory when unset
    pub root: Option<PathBuf>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Tty
}

fn default_color_choice() -> ColorChoice {
    ColorChoice::Auto
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_package_list() -> PathBuf {
    PathBuf::from(PACKAGE_LIST_FILE)
}
