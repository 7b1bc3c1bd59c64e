//! Mock implementations of session providers for testing
//!
//! These mocks let command handlers run against an in-memory filesystem
//! and captured output.

use crate::application::config::AppConfig;
use crate::application::session::{DisplayProvider, FileSystemProvider, Session};
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock filesystem provider for testing
#[derive(Default, Clone)]
pub struct MockFileSystemProvider {
    /// In-memory filesystem: path -> content
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MockFileSystemProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.into());
        self
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl FileSystemProvider for MockFileSystemProvider {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.file(path)
            .ok_or_else(|| anyhow!("Failed to read file: {}", path.display()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

/// Captures everything a handler displays
#[derive(Default, Clone)]
pub struct MockDisplayProvider {
    pub documents: Arc<Mutex<String>>,
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockDisplayProvider {
    pub fn output(&self) -> String {
        self.documents.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl DisplayProvider for MockDisplayProvider {
    fn document(&self, text: &str) -> Result<()> {
        self.documents.lock().unwrap().push_str(text);
        Ok(())
    }

    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Mock session rooted at `/work`
pub struct MockCommandSession {
    pub filesystem: MockFileSystemProvider,
    pub display: MockDisplayProvider,
    pub config: AppConfig,
}

impl MockCommandSession {
    pub const WORKDIR: &'static str = "/work";

    pub fn new() -> Self {
        Self {
            filesystem: MockFileSystemProvider::new(),
            display: MockDisplayProvider::default(),
            config: AppConfig {
                workdir: Some(PathBuf::from(Self::WORKDIR)),
                ..AppConfig::default()
            },
        }
    }

    /// Place a manifest at the configured manifest path
    pub fn with_manifest(mut self, file_name: &str, content: &str) -> Self {
        self.config.manifest = PathBuf::from(file_name);
        let path = self.config.manifest_path();
        self.filesystem = self.filesystem.with_file(path, content);
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.filesystem = self.filesystem.with_file(path, content);
        self
    }
}

impl Default for MockCommandSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for MockCommandSession {
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
