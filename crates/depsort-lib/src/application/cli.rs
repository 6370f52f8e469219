use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// depsort CLI - package installation ordering
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "depsort")]
#[command(about = "Compute dependency-first installation orders for packages")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// depsort commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Cli::parse().into())
    }
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available depsort commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Show version information
    Version,

    /// List every known package
    Packages,

    /// Installation order for one package and everything it needs
    Order {
        #[arg(help = "Package to install")]
        package: String,
    },

    /// One installation order covering every package
    OrderAll,

    /// Packages still missing for NEW when INSTALLED is already present
    ToInstall {
        #[arg(help = "Package to install")]
        new: String,

        #[arg(help = "Package that is already installed, with its dependencies")]
        installed: String,
    },

    /// Package with the most transitive dependencies
    MaxDeps,

    /// Dependencies of a package
    Deps {
        #[arg(help = "Package to inspect")]
        package: String,

        /// Follow dependencies transitively
        #[arg(short, long, help = "List every package reachable, not just direct ones")]
        transitive: bool,
    },
}

impl Commands {
    /// Check if command needs a manifest to run
    pub fn requires_manifest(&self) -> bool {
        match self {
            Commands::Version => false,
            Commands::Packages => true,
            Commands::Order { .. } => true,
            Commands::OrderAll => true,
            Commands::ToInstall { .. } => true,
            Commands::MaxDeps => true,
            Commands::Deps { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
