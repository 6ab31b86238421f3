//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::{Style, Term};
use lytc_config::{Exports, Toolchain};
use lytc_types::{
    find_package, ColorChoice, DerivedPackageInfo, ExportFormat, OutputFormat, Profile,
    ToolchainPaths,
};
use std::io;
use std::path::Path;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    format: OutputFormat,
    colors: bool,
    /// Style even when stdout is not a terminal (`--color always`)
    force_colors: bool,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(format: OutputFormat, color_choice: ColorChoice) -> Self {
        let colors = match color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => Term::stdout().features().colors_supported(),
        };
        Self {
            format,
            colors,
            force_colors: color_choice == ColorChoice::Always,
        }
    }

    /// `style` as configured, or no styling when colors are off
    fn style(&self, style: Style) -> Style {
        if self.force_colors {
            style.force_styling(true)
        } else if self.colors {
            style
        } else {
            Style::new()
        }
    }

    fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn render_json(value: &impl serde::Serialize) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        println!("{json}");
        Ok(())
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if self.force_colors {
            table.enforce_styling();
        } else if !self.colors {
            table.force_no_tty();
        }
        table
    }

    fn header(name: &str) -> Cell {
        Cell::new(name).add_attribute(Attribute::Bold)
    }

    /// Render root, prefix and target
    pub fn render_paths(&self, paths: &ToolchainPaths, profile: Profile) -> io::Result<()> {
        if self.is_json() {
            return Self::render_json(paths);
        }

        let sysroot = paths
            .sysroot
            .as_deref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());
        let rows = [
            ("Root", paths.root.display().to_string()),
            ("Prefix", paths.prefix.display().to_string()),
            ("Binaries", paths.prefix_bin.display().to_string()),
            ("Sysroot", sysroot),
            ("Target", paths.target.clone()),
            ("Profile", profile.to_string()),
        ];

        if self.format == OutputFormat::Plain {
            for (label, value) in rows {
                println!("{}: {value}", label.to_lowercase());
            }
            return Ok(());
        }

        let mut table = self.new_table();
        table.set_header(vec![Self::header("Path"), Self::header("Value")]);
        for (label, value) in rows {
            table.add_row(vec![Cell::new(label), Cell::new(value)]);
        }
        println!("{table}");
        Ok(())
    }

    /// Render package list
    pub fn render_packages(&self, packages: &[DerivedPackageInfo]) -> io::Result<()> {
        if self.is_json() {
            return Self::render_json(&packages);
        }

        if self.format == OutputFormat::Plain {
            for package in packages {
                println!("{}\t{}", package.versioned_name, package.tarball_url);
            }
            return Ok(());
        }

        let mut table = self.new_table();
        table.set_header(vec![
            Self::header("Package"),
            Self::header("Version"),
            Self::header("Layout"),
            Self::header("Tarball URL"),
        ]);

        for package in packages {
            let layout = find_package(&package.name)
                .map_or_else(|| "-".to_string(), |def| def.layout.to_string());
            table.add_row(vec![
                Cell::new(&package.name).fg(Color::Cyan),
                Cell::new(&package.version),
                Cell::new(layout),
                Cell::new(&package.tarball_url),
            ]);
        }

        println!("{table}");
        Ok(())
    }

    /// Render a single package
    pub fn render_package(&self, package: &DerivedPackageInfo) -> io::Result<()> {
        if self.is_json() {
            return Self::render_json(package);
        }

        let rows = [
            ("Name", package.name.as_str()),
            ("Version", package.version.as_str()),
            ("Repository", package.repo.as_str()),
            ("Versioned name", package.versioned_name.as_str()),
            ("Tarball", package.tarball_name.as_str()),
            ("Tarball URL", package.tarball_url.as_str()),
        ];

        let label_style = self.style(Style::new().bold());
        for (label, value) in rows {
            println!("{:<15} {value}", label_style.apply_to(format!("{label}:")));
        }
        Ok(())
    }

    /// Render exported constants
    pub fn render_exports(&self, exports: &Exports, format: Option<ExportFormat>) -> io::Result<()> {
        let format = format.unwrap_or(if self.is_json() {
            ExportFormat::Json
        } else {
            ExportFormat::Shell
        });
        let rendered = exports.render(format).map_err(io::Error::other)?;
        print!("{rendered}");
        Ok(())
    }

    /// Render the outcome of `check`
    pub fn render_check(&self, toolchain: &Toolchain, list_path: &Path) -> io::Result<()> {
        if self.is_json() {
            return Self::render_json(&serde_json::json!({
                "ok": true,
                "profile": toolchain.profile,
                "package_list": list_path.display().to_string(),
                "packages": toolchain.packages.iter().map(|p| &p.versioned_name).collect::<Vec<_>>(),
            }));
        }

        let ok = self.style(Style::new().green().bold());
        println!(
            "{} {} packages resolved for the {} profile from {}",
            ok.apply_to("[OK]"),
            toolchain.packages.len(),
            toolchain.profile,
            list_path.display()
        );
        Ok(())
    }

    /// Render a success message
    pub fn render_success(&self, message: &str) -> io::Result<()> {
        if self.is_json() {
            return Self::render_json(&serde_json::json!({ "ok": true, "message": message }));
        }
        println!("{message}");
        Ok(())
    }
}
