//! Manifest fixtures and typed views of JSON command output

use anyhow::{Context, Result};
use depsort_lib::{Manifest, PackageEntry};
use serde::{Deserialize, de::DeserializeOwned};

/// A -> {B, C}, B -> D, C -> D
pub fn diamond() -> Manifest {
    Manifest {
        packages: vec![
            PackageEntry::new("A", &["B", "C"]),
            PackageEntry::new("B", &["D"]),
            PackageEntry::new("C", &["D"]),
            PackageEntry::new("D", &[]),
        ],
    }
}

/// X <-> Y, plus an isolated Z
pub fn cycle_with_isolated() -> Manifest {
    Manifest {
        packages: vec![
            PackageEntry::new("X", &["Y"]),
            PackageEntry::new("Y", &["X"]),
            PackageEntry::new("Z", &[]),
        ],
    }
}

/// A small web stack where some packages only appear as dependencies
pub fn web_stack() -> Manifest {
    Manifest {
        packages: vec![
            PackageEntry::new("app", &["http", "log", "config"]),
            PackageEntry::new("http", &["net", "log"]),
            PackageEntry::new("config", &["serde"]),
            PackageEntry::new("cli", &["config", "log"]),
            PackageEntry::new("net", &["log"]),
        ],
    }
}

/// Output of list-valued commands in `--format json`
#[derive(Debug, Deserialize)]
pub struct ListOutput {
    pub query: String,
    #[serde(default)]
    pub package: Option<String>,
    pub packages: Vec<String>,
}

/// Output of `max-deps` in `--format json`
#[derive(Debug, Deserialize)]
pub struct MaxDepsOutput {
    pub package: Option<String>,
    pub dependencies: usize,
}

/// Parse JSON command output into a typed value
pub fn parse_output<T>(output: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(output)
        .with_context(|| format!("Failed to parse command output: {}", output))
}
