//! Hermetic test environment for E2E testing
//!
//! Each `TestEnvironment` owns a temp dir holding the manifest under test.
//! Commands run in-process through the same config and loader path the
//! binary uses, with output captured into a string.

use anyhow::Result;
use depsort_lib::application::commands::{execute_command_with_resolver, load_resolver};
use depsort_lib::display::Display;
use depsort_lib::{AppConfig, ColorIntent, Commands, Manifest, OutputFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated directory plus the config pointing at its manifest
pub struct TestEnvironment {
    /// Temporary directory for the test environment
    pub temp_dir: TempDir,
    /// Manifest path commands will read
    pub manifest_path: PathBuf,
    /// Result format for `run`
    pub format: OutputFormat,
}

impl TestEnvironment {
    /// Create an environment with no manifest written yet
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let manifest_path = temp_dir.path().join("packages.json");
        Ok(Self {
            temp_dir,
            manifest_path,
            format: OutputFormat::Text,
        })
    }

    /// Create an environment with `manifest` written as JSON
    pub fn with_json(manifest: &Manifest) -> Result<Self> {
        let mut env = Self::new()?;
        env.write_json_manifest("packages.json", manifest)?;
        Ok(env)
    }

    /// Create an environment with `manifest` written as TOML
    pub fn with_toml(manifest: &Manifest) -> Result<Self> {
        let mut env = Self::new()?;
        env.write_toml_manifest("packages.toml", manifest)?;
        Ok(env)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Switch `run` output to JSON
    pub fn json(mut self) -> Self {
        self.format = OutputFormat::Json;
        self
    }

    /// Write `manifest` as JSON and make it the active manifest
    pub fn write_json_manifest(&mut self, name: &str, manifest: &Manifest) -> Result<PathBuf> {
        let content = serde_json::to_string_pretty(manifest)?;
        self.write_raw_manifest(name, &content)
    }

    /// Write `manifest` as TOML and make it the active manifest
    pub fn write_toml_manifest(&mut self, name: &str, manifest: &Manifest) -> Result<PathBuf> {
        let content = toml::to_string(manifest)?;
        self.write_raw_manifest(name, &content)
    }

    /// Write arbitrary manifest text and make it the active manifest
    pub fn write_raw_manifest(&mut self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        fs::write(&path, content)?;
        self.manifest_path = path.clone();
        Ok(path)
    }

    /// Config the way the binary would see it for this environment
    pub fn config(&self) -> AppConfig {
        AppConfig {
            manifest: self.manifest_path.clone(),
            format: self.format,
            color: ColorIntent::Never,
            ..AppConfig::default()
        }
    }

    /// Load the manifest and run `command`, returning what it printed
    pub fn run(&self, command: Commands) -> Result<String> {
        let config = self.config();
        let resolver = load_resolver(&config)?;
        let display = Display::from_config(&config);

        let mut out = Vec::new();
        execute_command_with_resolver(command, &resolver, &display, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    /// Run `command` and split its text output into lines
    pub fn run_lines(&self, command: Commands) -> Result<Vec<String>> {
        Ok(self.run(command)?.lines().map(str::to_string).collect())
    }
}
