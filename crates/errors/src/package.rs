//! Package lookup error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    #[error("unknown package: {name}")]
    UnknownPackage { name: String },

    #[error("package {name} is not part of the {profile} profile")]
    NotInProfile { name: String, profile: String },
}

impl UserFacingError for PackageError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownPackage { .. } => Some("Run `lytc packages` to list known packages."),
            Self::NotInProfile { .. } => Some("Select the full profile with --profile full."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::UnknownPackage { .. } => Some("package.unknown"),
            Self::NotInProfile { .. } => Some("package.not_in_profile"),
        }
    }
}
