//! # modforge Library
//!
//! Generates project build definitions (targets, schemes and their
//! dependency edges) from a list of declared modules.
//!
//! ## Core Modules
//!
//! - [`module`] - Module model, dependency resolution, target and scheme synthesis
//! - [`manifest`] - YAML/TOML manifest loading into a validated project plan
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`logger`] - Structured logging with progress tracking
//! - [`application`] - CLI interface, configuration and command execution
//!
//! ## Quick Start
//!
//! ```no_run
//! use modforge_lib::manifest::ProjectPlan;
//!
//! let plan = ProjectPlan::load("modforge.yml".as_ref()).unwrap();
//! println!("{}", plan.assemble().unwrap().to_json().unwrap());
//! ```

pub mod application;
pub mod logger;
pub mod manifest;
pub mod module;
pub mod primitives;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use manifest::{Manifest, ManifestError, ProjectPlan};
pub use module::{
    Module, ModuleConfig, ModuleGraph, ModuleGraphError, ModuleName, Project, ProjectContext,
};
pub use primitives::{ColorChoice, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};

use anyhow::Result;
use tracing::debug;

/// Binary entry point: load configuration, start logging, run the command
pub fn main() -> Result<()> {
    let (config, cli) = AppConfig::load()?;

    let logger = Logger::init(config.to_logger_config())?;
    let config = AppConfig::init_global(config)?;
    debug!(
        level = ?logger.level(),
        workdir = ?config.workdir,
        manifest = %config.manifest.display(),
        "Configuration loaded"
    );

    execute_command(config.clone(), cli.command)
}
