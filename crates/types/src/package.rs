//! Package-related type definitions

use crate::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The `version`/`repo` pair read from one package-list section
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageSpec {
    pub version: String,
    /// Download base URL, used verbatim as a prefix
    pub repo: String,
}

impl PackageSpec {
    /// Create a new package spec
    pub fn new(version: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            repo: repo.into(),
        }
    }
}

/// Source archive compression, which fixes the tarball extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchiveFormat {
    TarBz2,
    TarGz,
}

impl ArchiveFormat {
    /// File extension including the leading dot
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::TarBz2 => ".tar.bz2",
            Self::TarGz => ".tar.gz",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where a tarball sits below its repository URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlLayout {
    /// `repo/<name>-<version>.tar.*`
    Flat,
    /// `repo/<name>-<version>/<name>-<version>.tar.*`
    NestedByName,
    /// `repo/<version>/<name>-<version>.tar.*`
    NestedByVersion,
}

impl fmt::Display for UrlLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::NestedByName => write!(f, "nested-by-name"),
            Self::NestedByVersion => write!(f, "nested-by-version"),
        }
    }
}

/// Static definition of a toolchain package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageDef {
    /// Section name in the package list, also the tarball prefix
    pub name: &'static str,
    pub archive: ArchiveFormat,
    pub layout: UrlLayout,
    /// Smallest profile that includes this package
    pub profile: Profile,
}

impl PackageDef {
    /// Whether this package is resolved under `profile`
    #[must_use]
    pub fn in_profile(&self, profile: Profile) -> bool {
        profile.includes(self.profile)
    }

    /// Upper-case prefix for exported constant names (`gcc` -> `GCC`)
    #[must_use]
    pub fn constant_prefix(&self) -> String {
        self.name.to_ascii_uppercase().replace('-', "_")
    }
}

/// Every package the toolchain knows about, in build order
pub const PACKAGES: &[PackageDef] = &[
    PackageDef {
        name: "gcc",
        archive: ArchiveFormat::TarBz2,
        layout: UrlLayout::NestedByName,
        profile: Profile::Minimal,
    },
    PackageDef {
        name: "binutils",
        archive: ArchiveFormat::TarBz2,
        layout: UrlLayout::Flat,
        profile: Profile::Minimal,
    },
    PackageDef {
        name: "newlib",
        archive: ArchiveFormat::TarGz,
        layout: UrlLayout::Flat,
        profile: Profile::Full,
    },
    PackageDef {
        name: "nasm",
        archive: ArchiveFormat::TarGz,
        layout: UrlLayout::NestedByVersion,
        profile: Profile::Minimal,
    },
    PackageDef {
        name: "coreutils",
        archive: ArchiveFormat::TarGz,
        layout: UrlLayout::Flat,
        profile: Profile::Full,
    },
    PackageDef {
        name: "dash",
        archive: ArchiveFormat::TarGz,
        layout: UrlLayout::Flat,
        profile: Profile::Full,
    },
];

/// Look up a package definition by section name
#[must_use]
pub fn find_package(name: &str) -> Option<&'static PackageDef> {
    PACKAGES.iter().find(|def| def.name == name)
}

/// Names, tarballs and download location derived for one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPackageInfo {
    pub name: String,
    pub version: String,
    pub repo: String,
    /// `<name>-<version>`
    pub versioned_name: String,
    pub tarball_name: String,
    pub tarball_url: String,
}

impl fmt::Display for DerivedPackageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.versioned_name, self.tarball_url)
    }
}
