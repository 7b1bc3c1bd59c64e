//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const MANIFEST: &str = "modforge.yml";
    pub const LOG_LEVEL: u8 = 0; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

mod default_fns {
    use super::*;

    pub fn manifest() -> PathBuf {
        PathBuf::from(defaults::MANIFEST)
    }

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorChoice {
        ColorChoice::Auto
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Parser, Deserialize)]
pub struct AppConfig {
    /// Directory the manifest and generated paths are relative to
    #[arg(short, long, global = true, env = "MODFORGE_WORKDIR")]
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// Manifest file (.yml, .yaml or .toml)
    #[arg(short, long, global = true, env = "MODFORGE_MANIFEST", default_value = defaults::MANIFEST)]
    #[serde(default = "default_fns::manifest")]
    pub manifest: PathBuf,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, global = true, env = "MODFORGE_LOG_LEVEL", default_value_t = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, global = true, env = "MODFORGE_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, global = true, env = "MODFORGE_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, global = true, env = "MODFORGE_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            manifest: default_fns::manifest(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.color.use_ansi(),
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.workdir.is_some() {
            self.workdir = other.workdir;
        }
        if other.manifest != default_fns::manifest() {
            self.manifest = other.manifest;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorChoice::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration, resolving the working directory
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let workdir = match self.workdir.take() {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        if !workdir.is_dir() {
            return Err(ConfigError::InvalidWorkDir {
                path: workdir.display().to_string(),
            });
        }
        self.workdir = Some(workdir);

        Ok(())
    }

    /// Manifest path, joined onto the working directory when relative
    pub fn manifest_path(&self) -> PathBuf {
        match &self.workdir {
            Some(dir) if self.manifest.is_relative() => dir.join(&self.manifest),
            _ => self.manifest.clone(),
        }
    }

    /// Resolve a user-supplied path the same way as the manifest
    pub fn resolve_path(&self, path: &std::path::Path) -> PathBuf {
        match &self.workdir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
