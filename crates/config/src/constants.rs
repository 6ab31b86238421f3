//! Fixed names and directory suffixes
//!
//! The install layout below the toolchain root is not configurable. Build
//! scripts hard-code these relative locations.

/// Package list file name, resolved against the toolchain root
pub const PACKAGE_LIST_FILE: &str = "packages.list";

/// Install prefix, relative to the root
pub const PREFIX_DIR: &str = "local";
/// Binary directory, relative to the prefix
pub const BIN_DIR: &str = "bin";
/// Sysroot, relative to the root
pub const SYSROOT_DIR: &str = "../sysroot";

/// Settings directory name under the user's config dir
pub const CONFIG_DIR_NAME: &str = "lytc";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Section that supplies fallback values to every other section
pub const DEFAULT_SECTION: &str = "DEFAULT";
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

pub const ENV_OUTPUT: &str = "LYTC_OUTPUT";
pub const ENV_COLOR: &str = "LYTC_COLOR";
pub const ENV_PROFILE: &str = "LYTC_PROFILE";
pub const ENV_TARGET: &str = "LYTC_TARGET";
pub const ENV_PACKAGE_LIST: &str = "LYTC_PACKAGE_LIST";
pub const ENV_ROOT: &str = "LYTC_ROOT";
