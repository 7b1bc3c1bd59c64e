//! Project assembly: every module's targets and schemes plus the
//! externally supplied ones, in a stable order.

use super::context::ProjectContext;
use super::graph::ModuleGraph;
use super::scheme::{Scheme, synthesize_schemes};
use super::target::{SynthesisError, Target, synthesize_targets};
use super::values::{Package, Settings};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Project-level inputs that are not derived from modules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectExtras {
    pub targets: Vec<Target>,
    pub packages: Vec<Package>,
    pub schemes: Vec<Scheme>,
    pub additional_files: Vec<String>,
    pub settings: Settings,
}

/// Descriptor consumed by the project generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,
    #[serde(default, skip_serializing_if = "Settings::is_empty")]
    pub settings: Settings,
    pub targets: Vec<Target>,
    pub schemes: Vec<Scheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_files: Vec<String>,
}

impl Project {
    /// Module targets (modules in name order) come before the extra targets;
    /// extra schemes come before module schemes.
    pub fn assemble(
        name: impl Into<String>,
        graph: &ModuleGraph,
        extras: ProjectExtras,
        context: &ProjectContext,
    ) -> Result<Self, SynthesisError> {
        let name = name.into();
        let span = crate::progress_span!("assemble", total = graph.len());
        let _enter = span.enter();

        let mut targets = Vec::new();
        let mut module_schemes = Vec::new();
        for module in graph.modules() {
            targets.extend(synthesize_targets(graph, module, context)?);
            module_schemes.extend(synthesize_schemes(module));
        }
        targets.extend(extras.targets);

        let mut schemes = extras.schemes;
        schemes.extend(module_schemes);

        info!(
            project = %name,
            modules = graph.len(),
            targets = targets.len(),
            schemes = schemes.len(),
            "Assembled project"
        );

        Ok(Self {
            name,
            packages: extras.packages,
            settings: extras.settings,
            targets,
            schemes,
            additional_files: extras.additional_files,
        })
    }

    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|target| target.name == name)
    }

    /// Pretty JSON with a trailing newline; identical input gives identical bytes
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    include!("project.test.rs");
}
