//! Command line interface definition

use clap::{Parser, Subcommand};
use lytc_types::{ColorChoice, ExportFormat, Profile};
use std::path::PathBuf;

/// lytc - Lyos cross-toolchain configuration resolver
#[derive(Parser)]
#[command(name = "lytc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve Lyos cross-toolchain paths and package download URLs")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Color output control
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    /// Use alternate settings file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Toolchain root directory (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Which packages to resolve
    #[arg(long, global = true, value_enum)]
    pub profile: Option<Profile>,

    /// Package list file, relative to the root unless absolute
    #[arg(long, global = true, value_name = "PATH")]
    pub package_list: Option<PathBuf>,

    /// Target triple
    #[arg(long, global = true, value_name = "TRIPLE")]
    pub target: Option<String>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the root, prefix, sysroot and target
    Paths,

    /// List every package with its tarball and download URL
    #[command(alias = "ls")]
    Packages,

    /// Show one package
    Show {
        /// Package name (section in the package list)
        package: String,
    },

    /// Print all constants for build scripts
    Env {
        /// Output syntax (default: shell, or json with --json)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Verify that the package list resolves for the selected profile
    Check,

    /// Write a starter package list into the toolchain root
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,

        /// Also write the settings file
        #[arg(long)]
        write_config: bool,
    },
}
