//! Command session architecture
//!
//! Each command execution creates a session that owns the providers it
//! talks to, so handlers can run against live I/O or in-memory mocks.

use crate::application::config::AppConfig;
use anyhow::{Context, Result};
use console::{Term, style};
use std::path::Path;

/// Provider trait for filesystem operations
pub trait FileSystemProvider {
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write string content to file, creating parent directories
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// Provider trait for user-facing output
pub trait DisplayProvider {
    /// Primary command output (descriptor JSON, resolved edges), on stdout
    fn document(&self, text: &str) -> Result<()>;

    /// Short status line on stderr
    fn success(&self, message: &str);
}

/// Session trait that both CommandSession and MockCommandSession implement
pub trait Session {
    fn display(&self) -> &dyn DisplayProvider;

    fn filesystem(&self) -> &dyn FileSystemProvider;

    fn config(&self) -> &AppConfig;
}

/// Live implementation of FileSystemProvider
pub struct LiveFileSystemProvider;

impl FileSystemProvider for LiveFileSystemProvider {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Live implementation of DisplayProvider
pub struct LiveDisplayProvider {
    stdout: Term,
    stderr: Term,
}

impl LiveDisplayProvider {
    pub fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
        }
    }
}

impl Default for LiveDisplayProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayProvider for LiveDisplayProvider {
    fn document(&self, text: &str) -> Result<()> {
        self.stdout
            .write_str(text)
            .context("Failed to write to stdout")?;
        self.stdout.flush().context("Failed to flush stdout")
    }

    fn success(&self, message: &str) {
        // Status lines are best-effort; a closed stderr must not fail the command
        let _ = self
            .stderr
            .write_line(&format!("{} {}", style("✓").green(), message));
    }
}

/// Live session used by the binary
pub struct CommandSession {
    config: AppConfig,
    filesystem: LiveFileSystemProvider,
    display: LiveDisplayProvider,
}

impl CommandSession {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            filesystem: LiveFileSystemProvider,
            display: LiveDisplayProvider::new(),
        }
    }
}

impl Session for CommandSession {
    fn display(&self) -> &dyn DisplayProvider {
        &self.display
    }

    fn filesystem(&self) -> &dyn FileSystemProvider {
        &self.filesystem
    }

    fn config(&self) -> &AppConfig {
        &self.config
    }
}
