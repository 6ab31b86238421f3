//! Build profiles

use lytc_errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which slice of the toolchain is resolved
///
/// `Minimal` covers the cross compiler (gcc, binutils, nasm) and has no
/// sysroot. `Full` adds the C library and userland packages and the sysroot
/// they are installed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Minimal,
    #[default]
    Full,
}

impl Profile {
    /// Whether everything in `other` is also part of `self`
    #[must_use]
    pub fn includes(self, other: Profile) -> bool {
        match self {
            Self::Full => true,
            Self::Minimal => other == Self::Minimal,
        }
    }

    /// Whether a sysroot is configured for this profile
    #[must_use]
    pub fn has_sysroot(self) -> bool {
        matches!(self, Self::Full)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimal" => Ok(Self::Minimal),
            "full" => Ok(Self::Full),
            _ => Err(ConfigError::InvalidValue {
                field: "profile".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl clap::ValueEnum for Profile {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Minimal, Self::Full]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}
