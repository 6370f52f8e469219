//! # depsort Library
//!
//! Dependency-first installation ordering for named packages.
//!
//! ## Core Modules
//!
//! - [`graph`] - Directed package graph storage
//! - [`resolver`] - Installation order, incremental install and cycle queries
//! - [`manifest`] - JSON/TOML package manifests
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`logger`] - Structured logging setup
//! - [`display`] - Text and JSON rendering of results
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```
//! use depsort_lib::DependencyResolver;
//!
//! let mut resolver = DependencyResolver::default();
//! resolver.add_edge("A", "B");
//! resolver.add_edge("A", "C");
//! resolver.add_edge("B", "D");
//! resolver.add_edge("C", "D");
//!
//! assert_eq!(resolver.installation_order("A")?, vec!["D", "B", "C", "A"]);
//! assert_eq!(resolver.to_install("A", "B")?, vec!["A", "C"]);
//! # Ok::<(), depsort_lib::ResolveError>(())
//! ```

pub mod application;
pub mod display;
pub mod graph;
pub mod logger;
pub mod manifest;
pub mod primitives;
pub mod resolver;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use graph::DependencyGraph;
pub use logger::Logger;
pub use manifest::{Manifest, ManifestError, PackageEntry};
pub use primitives::{
    ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, OutputFormat,
};
pub use resolver::{DependencyResolver, ResolveError};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;
use primitives::LogContext;

/// Run the depsort CLI: load layered config, start logging, execute the command
pub fn main() -> Result<()> {
    let config = CliConfig::load_layered()?;

    let logger = Logger::init(config.app_config.to_logger_config())?;
    logger.debug(
        &format!("Using manifest {}", config.app_config.manifest.display()),
        Some(LogContext::new("startup")),
    );

    execute_command(config)
}
