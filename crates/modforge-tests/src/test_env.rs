//! Isolated test environment for E2E testing
//!
//! A [`TestEnvironment`] owns a temporary working directory. Manifests and
//! generated descriptors live on the real filesystem and commands run
//! through a live [`CommandSession`] rooted there.

use anyhow::{Context, Result};
use modforge_lib::application::cli::Commands;
use modforge_lib::application::commands::execute_command_with_session;
use modforge_lib::application::config::AppConfig;
use modforge_lib::application::session::CommandSession;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project directory with a manifest
pub struct TestEnvironment {
    /// Kept alive for the lifetime of the environment
    pub temp_dir: TempDir,
    /// Working directory commands run in
    pub work_path: PathBuf,
    manifest: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let work_path = temp_dir.path().join("work");
        fs::create_dir_all(&work_path)?;

        Ok(Self {
            temp_dir,
            work_path,
            manifest: PathBuf::from("modforge.yml"),
        })
    }

    /// Environment with `content` written to `file_name` as the manifest
    pub fn with_manifest(file_name: &str, content: &str) -> Result<Self> {
        let mut env = Self::new()?;
        env.write_file(file_name, content)?;
        env.manifest = PathBuf::from(file_name);
        Ok(env)
    }

    pub fn write_file(&self, relative: impl AsRef<Path>, content: &str) -> Result<PathBuf> {
        let path = self.work_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn read_file(&self, relative: impl AsRef<Path>) -> Result<String> {
        let path = self.work_path.join(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    pub fn config(&self) -> AppConfig {
        AppConfig {
            workdir: Some(self.work_path.clone()),
            manifest: self.manifest.clone(),
            ..AppConfig::default()
        }
    }

    pub fn session(&self) -> CommandSession {
        CommandSession::new(self.config())
    }

    /// Run a command in this environment through the live session
    pub fn run(&self, command: Commands) -> Result<()> {
        execute_command_with_session(command, &self.session())
    }

    /// `generate -o <relative>` and return the written descriptor
    pub fn generate_to(&self, relative: &str) -> Result<String> {
        self.run(Commands::Generate {
            output: Some(PathBuf::from(relative)),
        })?;
        self.read_file(relative)
    }
}
