//! CLI error handling

use std::fmt;

use lytc_errors::UserFacingError;

/// CLI-specific error type
#[derive(Debug)]
pub enum CliError {
    /// Configuration error
    Config(lytc_errors::ConfigError),
    /// Resolution or lookup error
    Resolve(lytc_errors::Error),
    /// I/O error
    Io(std::io::Error),
}

impl CliError {
    fn write_details(f: &mut fmt::Formatter<'_>, err: &dyn UserFacingError) -> fmt::Result {
        if let Some(code) = err.user_code() {
            write!(f, "\n  Code: {code}")?;
        }
        if let Some(hint) = err.user_hint() {
            write!(f, "\n  Hint: {hint}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => {
                write!(f, "Configuration error: {}", e.user_message())?;
                Self::write_details(f, e)
            }
            CliError::Resolve(e) => {
                write!(f, "{}", e.user_message())?;
                Self::write_details(f, e)
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Resolve(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<lytc_errors::ConfigError> for CliError {
    fn from(e: lytc_errors::ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<lytc_errors::PackageError> for CliError {
    fn from(e: lytc_errors::PackageError) -> Self {
        CliError::Resolve(e.into())
    }
}

impl From<lytc_errors::Error> for CliError {
    fn from(e: lytc_errors::Error) -> Self {
        CliError::Resolve(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
