#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the lytc toolchain resolver
//!
//! This crate holds the static package table, the per-package formatting
//! policies and the value types produced by resolution.

pub mod package;
pub mod paths;
pub mod profile;

pub use package::{
    find_package, ArchiveFormat, DerivedPackageInfo, PackageDef, PackageSpec, UrlLayout, PACKAGES,
};
pub use paths::{ToolchainPaths, DEFAULT_TARGET};
pub use profile::Profile;

use serde::{Deserialize, Serialize};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    #[default]
    Tty,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = lytc_errors::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "tty" => Ok(Self::Tty),
            "json" => Ok(Self::Json),
            _ => Err(lytc_errors::ConfigError::InvalidValue {
                field: "output".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Always,
    #[default]
    Auto,
    Never,
}

impl clap::ValueEnum for ColorChoice {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Always, Self::Auto, Self::Never]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Always => clap::builder::PossibleValue::new("always"),
            Self::Auto => clap::builder::PossibleValue::new("auto"),
            Self::Never => clap::builder::PossibleValue::new("never"),
        })
    }
}

impl std::str::FromStr for ColorChoice {
    type Err = lytc_errors::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(lytc_errors::ConfigError::InvalidValue {
                field: "color".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Syntax used when printing resolved constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `export NAME='value'`
    #[default]
    Shell,
    /// `NAME := value`
    Make,
    Json,
}

impl clap::ValueEnum for ExportFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Shell, Self::Make, Self::Json]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Shell => clap::builder::PossibleValue::new("shell"),
            Self::Make => clap::builder::PossibleValue::new("make"),
            Self::Json => clap::builder::PossibleValue::new("json"),
        })
    }
}
