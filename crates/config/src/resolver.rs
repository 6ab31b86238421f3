//! Path and download URL resolution

use crate::constants::{BIN_DIR, PREFIX_DIR, SYSROOT_DIR};
use crate::exports::Exports;
use crate::package_list::{load_package_list, PackageList};
use crate::Config;
use lytc_errors::{Error, PackageError};
use lytc_types::{
    find_package, ArchiveFormat, DerivedPackageInfo, PackageSpec, Profile, ToolchainPaths,
    UrlLayout, PACKAGES,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Install locations below `root`
///
/// The suffixes are joined verbatim; `..` in the sysroot is not collapsed.
pub fn resolve_paths(root: &Path, profile: Profile, target: &str) -> ToolchainPaths {
    let prefix = root.join(PREFIX_DIR);
    let prefix_bin = prefix.join(BIN_DIR);
    let sysroot = profile.has_sysroot().then(|| root.join(SYSROOT_DIR));

    ToolchainPaths {
        root: root.to_path_buf(),
        prefix,
        prefix_bin,
        sysroot,
        target: target.to_string(),
    }
}

/// [`resolve_paths`] rooted at the current working directory
///
/// # Errors
///
/// Returns an I/O error if the working directory cannot be determined.
pub fn resolve_paths_from_cwd(profile: Profile, target: &str) -> Result<ToolchainPaths, Error> {
    let root = working_dir()?;
    Ok(resolve_paths(&root, profile, target))
}

/// Install locations for the root, profile and target in `config`
///
/// Without a configured root this is [`resolve_paths_from_cwd`].
///
/// # Errors
///
/// Returns an I/O error if the working directory cannot be determined.
pub fn configured_paths(config: &Config) -> Result<ToolchainPaths, Error> {
    let profile = config.toolchain.profile;
    let target = &config.toolchain.target;
    if config.paths.root.is_some() {
        Ok(resolve_paths(&config.root()?, profile, target))
    } else {
        resolve_paths_from_cwd(profile, target)
    }
}

pub(crate) fn working_dir() -> Result<PathBuf, Error> {
    Ok(std::env::current_dir()?)
}

/// Combine a package's fields with its naming policy
pub fn derive_package_info(
    name: &str,
    spec: &PackageSpec,
    archive: ArchiveFormat,
    layout: UrlLayout,
) -> DerivedPackageInfo {
    let versioned_name = format!("{name}-{}", spec.version);
    let tarball_name = format!("{versioned_name}{}", archive.extension());
    let tarball_url = match layout {
        UrlLayout::Flat => format!("{}{tarball_name}", spec.repo),
        UrlLayout::NestedByName => format!("{}{versioned_name}/{tarball_name}", spec.repo),
        UrlLayout::NestedByVersion => format!("{}{}/{tarball_name}", spec.repo, spec.version),
    };

    DerivedPackageInfo {
        name: name.to_string(),
        version: spec.version.clone(),
        repo: spec.repo.clone(),
        versioned_name,
        tarball_name,
        tarball_url,
    }
}

/// Everything downstream build steps need, resolved once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub profile: Profile,
    pub paths: ToolchainPaths,
    /// Packages of the profile, in table order
    pub packages: Vec<DerivedPackageInfo>,
}

impl Toolchain {
    /// Resolve every package of `profile` from an already parsed list
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` for the first package whose
    /// section or `version`/`repo` field is missing, and
    /// `ConfigError::Interpolation` if a field cannot be expanded.
    pub fn resolve(
        root: &Path,
        list: &PackageList,
        profile: Profile,
        target: &str,
    ) -> Result<Self, Error> {
        let paths = resolve_paths(root, profile, target);

        let mut packages = Vec::new();
        for def in PACKAGES.iter().filter(|def| def.in_profile(profile)) {
            let spec = list.package_spec(def.name)?;
            let info = derive_package_info(def.name, &spec, def.archive, def.layout);
            debug!(
                package = def.name,
                version = %info.version,
                url = %info.tarball_url,
                "Resolved package"
            );
            packages.push(info);
        }

        Ok(Self {
            profile,
            paths,
            packages,
        })
    }

    /// Load the package list named by `config` and resolve it
    ///
    /// # Errors
    ///
    /// Returns an error if the root cannot be determined, the package list
    /// cannot be loaded, or a required field is missing.
    pub fn load(config: &Config) -> Result<Self, Error> {
        let root = configured_paths(config)?.root;
        let list_path = config.package_list_path(&root);
        let list = load_package_list(&list_path)?;
        let toolchain = Self::resolve(
            &root,
            &list,
            config.toolchain.profile,
            &config.toolchain.target,
        )?;
        info!(
            root = %root.display(),
            profile = %toolchain.profile,
            packages = toolchain.packages.len(),
            "Toolchain resolved"
        );
        Ok(toolchain)
    }

    /// Resolved info for one package
    ///
    /// # Errors
    ///
    /// Returns `PackageError::UnknownPackage` for names outside the package
    /// table and `PackageError::NotInProfile` for packages the active profile
    /// does not resolve.
    pub fn package(&self, name: &str) -> Result<&DerivedPackageInfo, PackageError> {
        if find_package(name).is_none() {
            return Err(PackageError::UnknownPackage {
                name: name.to_string(),
            });
        }
        self.packages
            .iter()
            .find(|info| info.name == name)
            .ok_or_else(|| PackageError::NotInProfile {
                name: name.to_string(),
                profile: self.profile.to_string(),
            })
    }

    /// Named constants for build scripts
    pub fn exports(&self) -> Exports {
        Exports::from_toolchain(self)
    }
}
