use crate::primitives::ConfigError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// modforge CLI - module-based project definition generator
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "modforge")]
#[command(about = "Generate project targets and schemes from module declarations")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

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
        Ok(Self::from(Cli::parse()))
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

/// Available modforge commands
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Commands {
    /// Assemble the project descriptor from the manifest
    Generate {
        /// Write the descriptor here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fail if an existing descriptor differs from a fresh generation
    Check {
        /// Previously generated descriptor
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the resolved dependency edges of one module
    Resolve {
        /// Module name as declared in the manifest
        module: String,
    },

    /// Print the targets and schemes generated for one module
    Describe {
        /// Module name as declared in the manifest
        module: String,
    },

    /// Load and validate the manifest without generating anything
    Validate,

    /// Show version information
    Version,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
