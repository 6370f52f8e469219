//! depsort primitives - shared types and errors
//!
//! The enums here are what the CLI and env layers parse into: log settings
//! feed the logger, the colour intent feeds both the logger and the display,
//! and the error enums chain into anyhow at the top.

use clap::ValueEnum;
use std::path::PathBuf;
use thiserror::Error;

/// `FromStr` via the clap value table, so env values, serde defaults and
/// CLI flags accept the same spellings
macro_rules! from_str_via_value_enum {
    ($($ty:ty => $what:literal),+ $(,)?) => {
        $(
            impl std::str::FromStr for $ty {
                type Err = ConfigError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <Self as ValueEnum>::from_str(s, true).map_err(|_| ConfigError::ParseError {
                        value: s.to_string(),
                        reason: $what.to_string(),
                    })
                }
            }
        )+
    };
}

/// Stream the log subscriber writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    Stderr,
    Stdout,
}

/// Log line layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line records
    #[value(alias = "compact")]
    Text,
    /// One JSON object per record
    Json,
    /// Multi-line records with fields on their own lines
    Pretty,
}

/// Format for query results on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One package per line
    #[value(alias = "plain")]
    Text,
    /// A single JSON document
    Json,
}

/// Whether to emit ANSI colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorIntent {
    #[value(alias = "detect")]
    Auto,
    #[value(alias = "force")]
    Always,
    #[value(alias = "off")]
    Never,
}

impl ColorIntent {
    /// Resolve to a yes/no, asking the terminal when set to `Auto`
    pub fn enabled(self) -> bool {
        match self {
            ColorIntent::Always => true,
            ColorIntent::Never => false,
            ColorIntent::Auto => console::colors_enabled(),
        }
    }
}

from_str_via_value_enum!(
    LogFormat => "invalid log format",
    LogOutput => "invalid log output stream",
    OutputFormat => "invalid output format",
    ColorIntent => "invalid color choice",
);

/// Verbosity, from the numeric `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// 0 is errors only; anything from 4 up is trace
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Directive name understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Logger settings derived from `AppConfig`
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub ansi: bool,
}

/// Structured fields attached to a log record
#[derive(Debug, Clone)]
pub struct LogContext {
    pub operation: String,
    /// How many items the operation covers, when that is known
    pub items: Option<u64>,
}

impl LogContext {
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            items: None,
        }
    }

    pub fn with_items(operation: &str, items: u64) -> Self {
        Self {
            operation: operation.to_string(),
            items: Some(items),
        }
    }
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to get current directory: {source}")]
    CurrentDirError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
