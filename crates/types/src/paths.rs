//! Filesystem layout of a toolchain checkout

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Target triple the cross toolchain is configured for
pub const DEFAULT_TARGET: &str = "i686-pc-lyos";

/// Install locations derived from the toolchain root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainPaths {
    pub root: PathBuf,
    /// `root/local`
    pub prefix: PathBuf,
    /// `root/local/bin`
    pub prefix_bin: PathBuf,
    /// `root/../sysroot`, only set for the full profile
    pub sysroot: Option<PathBuf>,
    pub target: String,
}
