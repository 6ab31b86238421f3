//! Named constants for downstream build scripts
//!
//! Names follow the toolchain scripts: `ROOT_DIR`, `PREFIX`, `PREFIX_BIN`,
//! `SYSROOT`, `TARGET`, then `<PKG>_VERSION`, `<PKG>_REPO`, `<PKG>_TARBALL`
//! and `<PKG>_TARBALL_URL` per package. `<PKG>_VERSION` holds the versioned
//! name (`gcc-9.2.0`), not the bare version.

use crate::resolver::Toolchain;
use lytc_errors::Error;
use lytc_types::{find_package, ExportFormat};
use std::fmt::Write as _;

/// Ordered list of `(name, value)` constants
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Exports {
    entries: Vec<(String, String)>,
}

impl Exports {
    pub(crate) fn from_toolchain(toolchain: &Toolchain) -> Self {
        let paths = &toolchain.paths;
        let mut exports = Self::default();

        exports.push("ROOT_DIR", paths.root.display().to_string());
        exports.push("PREFIX", paths.prefix.display().to_string());
        exports.push("PREFIX_BIN", paths.prefix_bin.display().to_string());
        if let Some(sysroot) = &paths.sysroot {
            exports.push("SYSROOT", sysroot.display().to_string());
        }
        exports.push("TARGET", paths.target.clone());

        for info in &toolchain.packages {
            let prefix = find_package(&info.name).map_or_else(
                || info.name.to_ascii_uppercase(),
                |def| def.constant_prefix(),
            );
            exports.push(format!("{prefix}_VERSION"), info.versioned_name.clone());
            exports.push(format!("{prefix}_REPO"), info.repo.clone());
            exports.push(format!("{prefix}_TARBALL"), info.tarball_name.clone());
            exports.push(format!("{prefix}_TARBALL_URL"), info.tarball_url.clone());
        }

        exports
    }

    fn push(&mut self, name: impl Into<String>, value: String) {
        self.entries.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render all constants in `format`
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, format: ExportFormat) -> Result<String, Error> {
        let mut out = String::new();
        match format {
            ExportFormat::Shell => {
                for (name, value) in self.iter() {
                    let _ = writeln!(out, "export {name}={}", shell_quote(value));
                }
            }
            ExportFormat::Make => {
                for (name, value) in self.iter() {
                    let _ = writeln!(out, "{name} := {}", make_escape(value));
                }
            }
            ExportFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = self
                    .iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                    .collect();
                out = serde_json::to_string_pretty(&map)?;
                out.push('\n');
            }
        }
        Ok(out)
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn make_escape(value: &str) -> String {
    value.replace('$', "$$").replace('#', r"\#")
}
