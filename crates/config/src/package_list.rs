//! Package list parsing
//!
//! The package list is a sectioned `key = value` file with one section per
//! toolchain package:
//!
//! ```text
//! [gcc]
//! version = 9.2.0
//! repo = https://ftp.gnu.org/gnu/gcc/
//! ```
//!
//! Option names are case-insensitive, section names are not. A `[DEFAULT]`
//! section supplies fallbacks, and values may reference other options of the
//! same section with `%(name)s`.

use crate::constants::{DEFAULT_SECTION, MAX_INTERPOLATION_DEPTH};
use lytc_errors::{ConfigError, Error};
use lytc_types::PackageSpec;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Options of one section, keyed by lower-cased option name
type Section = BTreeMap<String, String>;

/// Parsed package list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList {
    source: String,
    defaults: Section,
    sections: BTreeMap<String, Section>,
}

/// Read and parse the package list at `path`
///
/// # Errors
///
/// Returns `ConfigError::NotFound` when the file does not exist,
/// `ConfigError::Unreadable` when it cannot be read as text, and
/// `ConfigError::ParseError` when its contents are malformed.
pub fn load_package_list(path: &Path) -> Result<PackageList, Error> {
    let source = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: source.clone(),
            }
        } else {
            ConfigError::Unreadable {
                path: source.clone(),
                error: e.to_string(),
            }
        }
    })?;

    let list = PackageList::parse(source, &contents)?;
    debug!(
        path = %path.display(),
        sections = list.sections.len(),
        "Loaded package list"
    );
    Ok(list)
}

impl PackageList {
    /// Parse package list text; `source` names it in error messages
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for an option before the first
    /// section header, an empty section or option name, a stray indented
    /// line, or a line that is not a header, option or comment.
    pub fn parse(source: impl Into<String>, text: &str) -> Result<Self, ConfigError> {
        let mut list = Self {
            source: source.into(),
            ..Self::default()
        };
        let mut current: Option<String> = None;
        let mut last_option: Option<String> = None;

        for (idx, line) in text.lines().enumerate() {
            let lineno = idx + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            if line.starts_with(char::is_whitespace) {
                if let (Some(section), Some(option)) = (current.as_deref(), last_option.as_deref())
                {
                    let continued = strip_inline_comment(trimmed);
                    match list.section_mut(section).get_mut(option) {
                        Some(value) => {
                            value.push('\n');
                            value.push_str(&continued);
                            continue;
                        }
                        None => return Err(list.error(lineno, "continuation of unknown option")),
                    }
                }
                return Err(list.error(lineno, "unexpected indented line"));
            }

            if let Some(rest) = trimmed.strip_prefix('[') {
                let close = rest
                    .find(']')
                    .ok_or_else(|| list.error(lineno, "unterminated section header"))?;
                let name = rest[..close].trim();
                if name.is_empty() {
                    return Err(list.error(lineno, "empty section name"));
                }
                if name != DEFAULT_SECTION && list.sections.contains_key(name) {
                    warn!(
                        source = %list.source,
                        section = name,
                        line = lineno,
                        "Duplicate section, merging into the earlier one"
                    );
                }
                if name != DEFAULT_SECTION {
                    list.sections.entry(name.to_string()).or_default();
                }
                current = Some(name.to_string());
                last_option = None;
                continue;
            }

            let Some(section) = current.as_deref() else {
                return Err(list.error(lineno, "option outside of any [section]"));
            };

            let split = line
                .find(|c| c == '=' || c == ':')
                .ok_or_else(|| list.error(lineno, "expected `key = value` or `key: value`"))?;
            let key = line[..split].trim().to_lowercase();
            if key.is_empty() {
                return Err(list.error(lineno, "option with empty name"));
            }
            let value = strip_inline_comment(line[split + 1..].trim());

            list.section_mut(section).insert(key.clone(), value);
            last_option = Some(key);
        }

        Ok(list)
    }

    /// Section names in sorted order, excluding `DEFAULT`
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Look up `option` in `section`, falling back to `DEFAULT`
    ///
    /// Returns `Ok(None)` when the section or option does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Interpolation` when a `%(name)s` reference
    /// cannot be expanded.
    pub fn get(&self, section: &str, option: &str) -> Result<Option<String>, ConfigError> {
        if !self.has_section(section) {
            return Ok(None);
        }
        let option = option.to_lowercase();
        match self.lookup_raw(section, &option) {
            Some(raw) => self.interpolate(section, &option, raw).map(Some),
            None => Ok(None),
        }
    }

    /// Look up a field that must be present
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when the section is absent or
    /// does not define `field`.
    pub fn require(&self, section: &str, field: &str) -> Result<String, ConfigError> {
        self.get(section, field)?
            .ok_or_else(|| ConfigError::MissingField {
                section: section.to_string(),
                field: field.to_string(),
            })
    }

    /// The `version` and `repo` of a package section
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` when the section is absent or
    /// lacks either field.
    pub fn package_spec(&self, name: &str) -> Result<PackageSpec, ConfigError> {
        let version = self.require(name, "version")?;
        let repo = self.require(name, "repo")?;
        Ok(PackageSpec { version, repo })
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        if name == DEFAULT_SECTION {
            &mut self.defaults
        } else {
            self.sections.entry(name.to_string()).or_default()
        }
    }

    fn lookup_raw(&self, section: &str, option: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(option))
            .or_else(|| self.defaults.get(option))
            .map(String::as_str)
    }

    fn interpolate(&self, section: &str, option: &str, raw: &str) -> Result<String, ConfigError> {
        let mut value = raw.to_string();
        for _ in 0..MAX_INTERPOLATION_DEPTH {
            if !value.contains("%(") {
                return Ok(value);
            }
            value = self.expand_once(section, option, &value)?;
        }
        if value.contains("%(") {
            return Err(ConfigError::Interpolation {
                section: section.to_string(),
                option: option.to_string(),
                message: format!("references nested deeper than {MAX_INTERPOLATION_DEPTH}"),
            });
        }
        Ok(value)
    }

    fn expand_once(&self, section: &str, option: &str, value: &str) -> Result<String, ConfigError> {
        let fail = |message: String| ConfigError::Interpolation {
            section: section.to_string(),
            option: option.to_string(),
            message,
        };

        let mut out = String::with_capacity(value.len());
        let mut rest = value;
        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];
            if let Some(tail) = after.strip_prefix('%') {
                out.push('%');
                rest = tail;
            } else if let Some(tail) = after.strip_prefix('(') {
                let close = tail
                    .find(')')
                    .ok_or_else(|| fail("unterminated `%(` reference".to_string()))?;
                let name = tail[..close].to_lowercase();
                let tail = tail[close + 1..]
                    .strip_prefix('s')
                    .ok_or_else(|| fail(format!("reference `%({name})` must end in `s`")))?;
                let replacement = self
                    .lookup_raw(section, &name)
                    .ok_or_else(|| fail(format!("reference to unknown option `{name}`")))?;
                out.push_str(replacement);
                rest = tail;
            } else {
                return Err(fail(
                    "`%` must be followed by `%` or `(name)s`".to_string(),
                ));
            }
        }
        out.push_str(rest);
        Ok(out)
    }

    fn error(&self, line: usize, message: &str) -> ConfigError {
        ConfigError::ParseError {
            path: self.source.clone(),
            line,
            message: message.to_string(),
        }
    }
}

/// Drop a trailing `;` comment; only a `;` preceded by whitespace counts
fn strip_inline_comment(value: &str) -> String {
    let mut prev_space = false;
    for (idx, c) in value.char_indices() {
        if c == ';' && prev_space {
            return value[..idx].trim_end().to_string();
        }
        prev_space = c.is_whitespace();
    }
    value.to_string()
}

/// Starter package list written by `lytc init`
pub const TEMPLATE: &str = "\
# Toolchain package versions and download locations.
# Each section needs `version` and `repo`; tarball names are derived.

[gcc]
version = 9.2.0
repo = https://ftp.gnu.org/gnu/gcc/

[binutils]
version = 2.33.1
repo = https://ftp.gnu.org/gnu/binutils/

[newlib]
version = 3.1.0
repo = ftp://sourceware.org/pub/newlib/

[nasm]
version = 2.14.02
repo = https://www.nasm.us/pub/nasm/releasebuilds/

[coreutils]
version = 8.31
repo = https://ftp.gnu.org/gnu/coreutils/

[dash]
version = 0.5.10.2
repo = http://gondor.apana.org.au/~herbert/dash/files/
";
