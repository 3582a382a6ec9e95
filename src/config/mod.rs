//! TOML configuration loading and `source = "..."` include resolution.
//!
//! Struct definitions live in `structs`; this module owns file discovery,
//! include expansion with cycle detection, and the merge strategy.

mod structs;

pub use structs::{GeneralConfig, LogConfig, NotifyConfig, PackageConfig};

use crate::fmt::{GlyphSet, Palette};
use crate::internal;
use crate::level::Level;
use crate::package::PackageDescriptor;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory before the per-user location.
pub const LOCAL_CONFIG_NAME: &str = "forkhandle.toml";

/// Every field is `#[serde(default)]`, so an empty file yields a working setup.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub package: PackageConfig,
    pub notify: NotifyConfig,
    pub log: LogConfig,
    /// Named color overrides, `red = "#ff5555"`.
    pub colors: HashMap<String, String>,
}

/// Pulls `source = "..."` lines out of raw TOML before deserialization.
/// Returns the extracted paths and the remaining TOML content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        let directive = trimmed
            .strip_prefix("source")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='));

        if let Some(value) = directive {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads `./forkhandle.toml` if present, otherwise the per-user config.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let local = Path::new(LOCAL_CONFIG_NAME);
        let config_path = if local.exists() {
            local.to_path_buf()
        } else {
            Self::get_config_path()?
        };
        internal::debug("CONFIG", &format!("Loading {}", config_path.display()));
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            let expanded = shellexpand::tilde(&source_path);
            let mut source_file = PathBuf::from(expanded.as_ref());
            // Relative includes resolve against the including file
            if source_file.is_relative()
                && let Some(dir) = path.parent()
            {
                source_file = dir.join(source_file);
            }

            if source_file.exists() {
                internal::debug("CONFIG", &format!("Processing source: {source_path}"));
                let source_config = Self::load_with_sources(&source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Folds an included config's `[colors]` into `self`; the including file's
    /// keys win. Scalar sections are owned by the including file.
    pub fn merge(&mut self, other: Self) {
        for (k, v) in other.colors {
            self.colors.entry(k).or_insert(v);
        }
    }

    /// `<config_dir>/forkhandle/forkhandle.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("forkhandle").join(LOCAL_CONFIG_NAME))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or(Level::Info)
    }

    #[must_use]
    pub fn parse_glyphs(&self) -> GlyphSet {
        GlyphSet::from_name(&self.log.glyphs)
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::from_table(&self.colors)
    }

    /// Resolves the package descriptor, reading `package.manifest` when set.
    ///
    /// # Errors
    /// Fails when the manifest is set but cannot be read or parsed.
    pub fn package_descriptor(&self) -> Result<PackageDescriptor, crate::Error> {
        let inline = PackageDescriptor {
            name: self.package.name.clone(),
            description: self.package.description.clone(),
        };

        let Some(manifest) = &self.package.manifest else {
            return Ok(inline);
        };

        let expanded = shellexpand::tilde(manifest);
        let from_manifest = PackageDescriptor::from_manifest(Path::new(expanded.as_ref()))?;
        Ok(PackageDescriptor {
            name: from_manifest.name.or(inline.name),
            description: if from_manifest.description.is_empty() {
                inline.description
            } else {
                from_manifest.description
            },
        })
    }
}
