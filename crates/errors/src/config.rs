//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("cannot read {path}: {error}")]
    Unreadable { path: String, error: String },

    #[error("parse error in {path} at line {line}: {message}")]
    ParseError {
        path: String,
        line: usize,
        message: String,
    },

    #[error("invalid settings file: {message}")]
    SettingsParse { message: String },

    #[error("missing required field: [{section}] {field}")]
    MissingField { section: String, field: String },

    #[error("bad interpolation in [{section}] {option}: {message}")]
    Interpolation {
        section: String,
        option: String,
        message: String,
    },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("refusing to overwrite existing file: {path}")]
    AlreadyExists { path: String },

    #[error("failed to write {path}: {error}")]
    WriteError { path: String, error: String },

    #[error("failed to serialize config: {error}")]
    SerializeError { error: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some(
                "Check the path, or run `lytc init` in the toolchain root to create a package list.",
            ),
            Self::MissingField { field, .. } => Some(match field.as_str() {
                "version" => "Add a `version = ...` line to the package's section.",
                "repo" => "Add a `repo = ...` line with the download base URL.",
                _ => "Add the missing field noted in the error message.",
            }),
            Self::Unreadable { .. } => Some("Check that the package list is a readable text file."),
            Self::ParseError { .. } | Self::Interpolation { .. } => {
                Some("Fix the package list syntax and retry.")
            }
            Self::SettingsParse { .. } | Self::InvalidValue { .. } => {
                Some("Fix the configuration value and retry the command.")
            }
            Self::AlreadyExists { .. } => Some("Pass --force to overwrite it."),
            Self::WriteError { .. } => Some("Ensure the target path is writable and retry."),
            Self::SerializeError { .. } => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::NotFound { .. } => "config.not_found",
            Self::Unreadable { .. } => "config.unreadable",
            Self::ParseError { .. } => "config.parse_error",
            Self::SettingsParse { .. } => "config.settings_parse",
            Self::MissingField { .. } => "config.missing_field",
            Self::Interpolation { .. } => "config.interpolation",
            Self::InvalidValue { .. } => "config.invalid_value",
            Self::AlreadyExists { .. } => "config.already_exists",
            Self::WriteError { .. } => "config.write_error",
            Self::SerializeError { .. } => "config.serialize_error",
        })
    }
}
