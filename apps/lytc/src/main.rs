//! lytc - Lyos cross-toolchain configuration resolver
//!
//! Loads settings, resolves the package list once and prints the derived
//! paths and download URLs for the toolchain build scripts.

mod cli;
mod display;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use lytc_config::{configured_paths, package_list, Config, Toolchain};
use lytc_errors::{ConfigError, Error};
use lytc_types::OutputFormat;
use std::path::Path;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let json_mode = cli.global.json;
    logging::init_tracing(json_mode, cli.global.debug);

    if let Err(e) = run(cli) {
        error!("Application error: {}", e);
        if !json_mode {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting lytc v{}", env!("CARGO_PKG_VERSION"));

    // Defaults < settings file < environment < CLI flags
    let mut config = Config::load_or_default(cli.global.config.as_deref())?;
    config.merge_env()?;
    apply_cli_config(&mut config, &cli.global);

    let format = if cli.global.json {
        OutputFormat::Json
    } else {
        config.general.default_output
    };
    let renderer = OutputRenderer::new(format, config.general.color);

    match cli.command {
        Commands::Init {
            force,
            write_config,
        } => {
            let settings_path = match (&cli.global.config, write_config) {
                (Some(path), true) => Some(path.clone()),
                (None, true) => Some(Config::default_path()?),
                (_, false) => None,
            };
            init(&config, force, settings_path.as_deref(), &renderer)?;
        }
        Commands::Paths => {
            let paths = configured_paths(&config)?;
            renderer.render_paths(&paths, config.toolchain.profile)?;
        }
        Commands::Packages => {
            let toolchain = Toolchain::load(&config)?;
            renderer.render_packages(&toolchain.packages)?;
        }
        Commands::Show { package } => {
            let toolchain = Toolchain::load(&config)?;
            renderer.render_package(toolchain.package(&package)?)?;
        }
        Commands::Env { format } => {
            let toolchain = Toolchain::load(&config)?;
            renderer.render_exports(&toolchain.exports(), format)?;
        }
        Commands::Check => {
            let toolchain = Toolchain::load(&config)?;
            let list_path = config.package_list_path(&toolchain.paths.root);
            renderer.render_check(&toolchain, &list_path)?;
        }
    }

    info!("Command completed successfully");
    Ok(())
}

/// Global CLI flags override everything
fn apply_cli_config(config: &mut Config, global: &cli::GlobalArgs) {
    if let Some(color) = global.color {
        config.general.color = color;
    }
    if let Some(profile) = global.profile {
        config.toolchain.profile = profile;
    }
    if let Some(target) = &global.target {
        config.toolchain.target.clone_from(target);
    }
    if let Some(list) = &global.package_list {
        config.toolchain.package_list.clone_from(list);
    }
    if let Some(root) = &global.root {
        config.paths.root = Some(root.clone());
    }
}

/// Write the starter package list and, optionally, the settings file
fn init(
    config: &Config,
    force: bool,
    settings_path: Option<&Path>,
    renderer: &OutputRenderer,
) -> Result<(), CliError> {
    let root = config.root()?;
    let list_path = config.package_list_path(&root);

    refuse_overwrite(&list_path, force)?;
    if let Some(parent) = list_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(&e, parent))?;
    }
    std::fs::write(&list_path, package_list::TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: list_path.display().to_string(),
        error: e.to_string(),
    })?;
    info!(path = %list_path.display(), "Wrote package list");

    let mut written = vec![list_path.display().to_string()];
    if let Some(path) = settings_path {
        refuse_overwrite(path, force)?;
        config.save_to(path)?;
        info!(path = %path.display(), "Wrote settings file");
        written.push(path.display().to_string());
    }

    renderer.render_success(&format!("Wrote {}", written.join(", ")))?;
    Ok(())
}

fn refuse_overwrite(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.display().to_string(),
        });
    }
    Ok(())
}
