//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration values
pub mod defaults {
    pub const MANIFEST: &str = "packages.json";
    pub const FORMAT: &str = "text";
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    // Fallbacks mirror the constants above

    pub fn manifest() -> PathBuf {
        PathBuf::from(defaults::MANIFEST)
    }

    pub fn format() -> OutputFormat {
        defaults::FORMAT.parse().unwrap_or(OutputFormat::Text)
    }

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap_or(0)
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap_or(LogFormat::Text)
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap_or(LogOutput::Stderr)
    }

    pub fn color() -> ColorIntent {
        defaults::COLOR.parse().unwrap_or(ColorIntent::Auto)
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Parser, Deserialize)]
pub struct AppConfig {
    /// Package manifest to read (.json or .toml)
    #[arg(short, long, env = "DEPSORT_MANIFEST", default_value = defaults::MANIFEST)]
    #[serde(default = "default_fns::manifest")]
    pub manifest: PathBuf,

    /// Result format (text, json)
    #[arg(short, long, env = "DEPSORT_FORMAT", default_value = defaults::FORMAT)]
    #[serde(default = "default_fns::format")]
    pub format: OutputFormat,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(
        long,
        env = "DEPSORT_LOG_LEVEL",
        default_value = defaults::LOG_LEVEL,
        value_parser = clap::value_parser!(u8).range(0..=4)
    )]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "DEPSORT_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "DEPSORT_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "DEPSORT_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            manifest: default_fns::manifest(),
            format: default_fns::format(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.color.enabled(),
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.manifest != default_fns::manifest() {
            self.manifest = other.manifest;
        }

        // For primitive fields, take other if it's not the default
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.format, OutputFormat::Text) {
            self.format = other.format;
        }
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    ///
    /// Relative manifest paths are resolved against the current directory.
    /// Whether the file exists is checked later, by commands that read it.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.log_level > 4 {
            return Err(ConfigError::ValidationFailed {
                reason: format!("log level must be 0-4, got {}", self.log_level),
            });
        }

        if self.manifest.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "manifest path is empty".to_string(),
            });
        }

        if self.manifest.is_relative() {
            self.manifest = std::env::current_dir()?.join(&self.manifest);
        }

        Ok(())
    }

    /// The manifest path, provided the file is there
    pub fn ensure_manifest(&self) -> Result<&Path, ConfigError> {
        if self.manifest.is_file() {
            Ok(&self.manifest)
        } else {
            Err(ConfigError::ManifestNotFound {
                path: self.manifest.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
