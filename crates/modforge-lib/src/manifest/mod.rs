//! Manifest loading
//!
//! A manifest (`modforge.yml` or `modforge.toml`) declares the project, its
//! modules and any hand-written targets and schemes. Loading it yields a
//! [`ProjectPlan`]: a validated module graph plus everything needed to
//! assemble the project descriptor.

use crate::module::context::{DEFAULT_BUNDLE_ID_TEMPLATE, DEFAULT_MODULES_ROOT};
use crate::module::values::{Package, Platform, Settings};
use crate::module::{
    ContextError, Module, ModuleGraph, ModuleGraphError, Project, ProjectContext, ProjectExtras,
    Scheme, SynthesisError, Target,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Manifest errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse YAML manifest {path}: {source}")]
    YamlError {
        path: PathBuf,
        source: serde_saphyr::Error,
    },

    #[error("Failed to parse TOML manifest {path}: {source}")]
    TomlError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unsupported manifest format: {path} (expected .yml, .yaml or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid module graph: {source}")]
    GraphError {
        #[from]
        source: ModuleGraphError,
    },

    #[error(transparent)]
    ContextError(#[from] ContextError),
}

/// Manifest syntax, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Toml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ManifestError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn default_bundle_id_template() -> String {
    DEFAULT_BUNDLE_ID_TEMPLATE.to_string()
}

fn default_modules_root() -> String {
    DEFAULT_MODULES_ROOT.to_string()
}

/// `project:` section
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    pub name: String,
    #[serde(default)]
    pub platform: Platform,
    /// Handlebars template rendered with `{{name}}` and `{{platform}}`
    #[serde(default = "default_bundle_id_template")]
    pub bundle_id_template: String,
    /// Directory holding one folder per module
    #[serde(default = "default_modules_root")]
    pub modules_root: String,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub additional_files: Vec<String>,
}

/// Parsed manifest file
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub project: ProjectSection,
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Targets not backed by a module, copied verbatim
    #[serde(default)]
    pub targets: Vec<Target>,
    /// Schemes not backed by a module, copied verbatim
    #[serde(default)]
    pub schemes: Vec<Scheme>,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let format = ManifestFormat::from_path(path)?;
        debug!("Loading manifest: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content, format, path)
    }

    /// Parse manifest text; `path` is only used in error messages
    pub fn parse(
        content: &str,
        format: ManifestFormat,
        path: &Path,
    ) -> Result<Self, ManifestError> {
        let manifest: Manifest = match format {
            ManifestFormat::Yaml => {
                serde_saphyr::from_str(content).map_err(|e| ManifestError::YamlError {
                    path: path.to_path_buf(),
                    source: e,
                })?
            }
            ManifestFormat::Toml => toml::from_str(content).map_err(|e| ManifestError::TomlError {
                path: path.to_path_buf(),
                source: e,
            })?,
        };

        trace!(
            project = %manifest.project.name,
            modules = manifest.modules.len(),
            targets = manifest.targets.len(),
            schemes = manifest.schemes.len(),
            "Parsed manifest"
        );
        Ok(manifest)
    }

    /// Validate the module graph, the explicit targets and the project settings
    pub fn into_plan(self) -> Result<ProjectPlan, ManifestError> {
        let context = ProjectContext::new(
            self.project.platform,
            self.project.modules_root,
            &self.project.bundle_id_template,
        )?;
        let graph = ModuleGraph::new(self.modules)?;
        graph.check_extra_targets(self.targets.iter().map(|target| target.name.as_str()))?;

        Ok(ProjectPlan {
            name: self.project.name,
            graph,
            context,
            extras: ProjectExtras {
                targets: self.targets,
                packages: self.project.packages,
                schemes: self.schemes,
                additional_files: self.project.additional_files,
                settings: self.project.settings,
            },
        })
    }
}

/// Validated manifest, ready to be assembled
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub name: String,
    pub graph: ModuleGraph,
    pub context: ProjectContext,
    pub extras: ProjectExtras,
}

impl ProjectPlan {
    /// Load and validate a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        Manifest::load(path)?.into_plan()
    }

    pub fn assemble(&self) -> Result<Project, SynthesisError> {
        Project::assemble(&self.name, &self.graph, self.extras.clone(), &self.context)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
