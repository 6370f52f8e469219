//! Configuration loading
//!
//! Coordinates loading configuration from env files, standard environment
//! variables and the command line.

use crate::primitives::ConfigError;
use std::path::Path;
use tracing::debug;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

/// Env files read before the CLI is parsed, highest priority first
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local` and `.env` from `dir` into the process environment
///
/// Missing files are skipped. Variables that are already set win, so the
/// first file to define a variable decides its value.
pub fn load_env_files(dir: &Path) -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        let path = dir.join(env_file);
        match dotenvy::from_path(&path) {
            Ok(()) => debug!("Loaded environment file: {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl AppConfig {
    /// Layer a CLI-parsed config over defaults and the standard env vars
    pub fn layered(cli: AppConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let env_config = EnvironmentConfig::load()?;
        config.color = env_config.apply_color_config(config.color);

        config = config.merge_with(cli);
        config.validate()?;

        Ok(config)
    }
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    ///
    /// Env files are read first so clap's `env` fallbacks can see them.
    pub fn load_layered() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        load_env_files(&cwd)?;

        let cli_config = Self::load()?;
        let app_config = AppConfig::layered(cli_config.app_config)?;

        Ok(Self {
            app_config,
            command: cli_config.command,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
