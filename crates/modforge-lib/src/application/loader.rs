//! Configuration loading and global state management
//!
//! Coordinates loading configuration from various sources and provides
//! global application configuration access.

use crate::primitives::ConfigError;
use std::sync::OnceLock;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

static GLOBAL_CONFIG: OnceLock<AppConfig> = OnceLock::new();

const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local` then `.env`; missing files are skipped
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(_) => {}
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
    /// Config from the process: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<(Self, CliConfig), ConfigError> {
        load_env_files()?;
        let cli_config = CliConfig::load()?;
        let config = Self::resolve(EnvironmentConfig::load()?, cli_config.app_config.clone())?;
        Ok((config, cli_config))
    }

    /// Layer standard env vars and CLI values over the defaults
    pub fn resolve(env_config: EnvironmentConfig, cli: AppConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.color = env_config.apply_color_config(config.color);
        config = config.merge_with(cli);
        config.validate()?;
        Ok(config)
    }

    /// Initialize global configuration (call once in main)
    pub fn init_global(config: AppConfig) -> Result<&'static AppConfig, ConfigError> {
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| ConfigError::AlreadyInitialized)?;
        GLOBAL_CONFIG.get().ok_or(ConfigError::AlreadyInitialized)
    }

    /// Global configuration, if `init_global` has run
    pub fn global() -> Option<&'static AppConfig> {
        GLOBAL_CONFIG.get()
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
