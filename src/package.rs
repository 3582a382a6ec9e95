//! The host project's package descriptor. Only the description is used at the
//! moment, as the subtitle of every notification.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Immutable once handed to `Handles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
struct CargoManifest {
    package: PackageDescriptor,
}

impl PackageDescriptor {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            name: None,
            description: description.into(),
        }
    }

    /// Reads `name` and `description` from a `package.json` or a `Cargo.toml`.
    /// The format is picked from the extension: `.json` or `.toml`.
    ///
    /// # Errors
    /// I/O errors, unknown extensions, and manifests that fail to parse.
    pub fn from_manifest(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        match ext {
            "json" => Self::from_package_json(&content),
            "toml" => Self::from_cargo_toml(&content),
            _ => Err(crate::Error::ManifestParse(format!(
                "unsupported manifest: {}",
                path.display()
            ))),
        }
    }

    /// # Errors
    /// Malformed JSON or a top level that is not an object.
    pub fn from_package_json(content: &str) -> Result<Self, crate::Error> {
        serde_json::from_str(content)
            .map_err(|e| crate::Error::ManifestParse(format!("package.json: {e}")))
    }

    /// Cargo keeps the fields under `[package]`.
    ///
    /// # Errors
    /// Malformed TOML or a missing `[package]` table.
    pub fn from_cargo_toml(content: &str) -> Result<Self, crate::Error> {
        toml::from_str::<CargoManifest>(content)
            .map(|manifest| manifest.package)
            .map_err(|e| crate::Error::ManifestParse(format!("Cargo.toml: {e}")))
    }
}
