//! Application layer modules
//!
//! Organizes the CLI interface, configuration management, and command
//! execution on top of the resolver.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;

// Re-export main types for convenience
pub use cli::{Cli, CliConfig, Commands};
pub use commands::{execute_command, execute_command_with_resolver, load_resolver};
pub use config::AppConfig;
pub use loader::*;
