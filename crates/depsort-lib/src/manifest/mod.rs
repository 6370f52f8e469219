//! Package manifest loading
//!
//! A manifest lists packages and the packages each one depends on:
//!
//! ```json
//! { "packages": [ { "name": "A", "dependencies": ["B", "C"] } ] }
//! ```
//!
//! The same shape is accepted as TOML (`[[packages]]` tables). Loading never
//! touches the graph until the whole file has parsed.

use crate::graph::DependencyGraph;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while loading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {path}: {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse TOML: {path}: {source}")]
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Package entry {index} has an empty name")]
    EmptyPackageName { index: usize },
}

/// Manifest file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    /// Pick a format from the file extension; anything but `.toml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Json,
        }
    }
}

/// A single declared package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    pub name: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl PackageEntry {
    pub fn new(name: &str, dependencies: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Parsed manifest: packages in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub packages: Vec<PackageEntry>,
}

impl Manifest {
    /// Parse a JSON manifest
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parse a TOML manifest
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse a manifest file, choosing the format by extension
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        debug!("Loading manifest: {}", path.display());

        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let manifest = match ManifestFormat::from_path(path) {
            ManifestFormat::Json => {
                Self::from_json_str(&content).map_err(|e| ManifestError::JsonParseError {
                    path: path.to_path_buf(),
                    source: e,
                })?
            }
            ManifestFormat::Toml => {
                Self::from_toml_str(&content).map_err(|e| ManifestError::TomlParseError {
                    path: path.to_path_buf(),
                    source: e,
                })?
            }
        };

        manifest.validate()?;
        debug!(packages = manifest.packages.len(), "Manifest loaded");
        Ok(manifest)
    }

    /// Reject entries the graph can't represent
    pub fn validate(&self) -> Result<(), ManifestError> {
        match self.packages.iter().position(|p| p.name.is_empty()) {
            Some(index) => Err(ManifestError::EmptyPackageName { index }),
            None => Ok(()),
        }
    }

    /// Build a dependency graph: one vertex per entry, one edge per dependency
    pub fn to_graph(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for entry in &self.packages {
            if graph.contains(&entry.name) {
                debug!("Package already registered, merging: {}", entry.name);
            }
            graph.add_vertex(&entry.name);

            for dep in &entry.dependencies {
                trace!("Found dependency: {} -> {}", entry.name, dep);
                graph.add_edge(&entry.name, dep);
            }
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
