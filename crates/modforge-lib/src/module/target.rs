//! Target synthesis: the main, resource-bundle and test targets of a module

use super::config::Module;
use super::context::{ContextError, ProjectContext};
use super::dependency::{TargetDependency, dedup_preserving_order};
use super::graph::{ModuleGraph, ModuleGraphError};
use super::values::{
    Headers, InfoPlist, Platform, ResourceFileElement, SettingValue, Settings,
    SettingsDictionary, TargetProduct, TargetScript,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while turning modules into targets
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error(transparent)]
    Graph(#[from] ModuleGraphError),

    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Buildable artifact handed to the project generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    #[serde(default)]
    pub platform: Platform,
    pub product: TargetProduct,
    pub bundle_id: String,
    #[serde(default)]
    pub info_plist: InfoPlist,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourceFileElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<TargetScript>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<TargetDependency>,
    #[serde(default, skip_serializing_if = "Settings::is_empty")]
    pub settings: Settings,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_files: Vec<String>,
}

impl Target {
    fn new(
        name: String,
        product: TargetProduct,
        context: &ProjectContext,
    ) -> Result<Self, ContextError> {
        Ok(Self {
            bundle_id: context.bundle_id(&name)?,
            name,
            platform: context.platform,
            product,
            info_plist: InfoPlist::Default,
            sources: Vec::new(),
            resources: Vec::new(),
            headers: None,
            scripts: Vec::new(),
            dependencies: Vec::new(),
            settings: Settings::default(),
            additional_files: Vec::new(),
        })
    }
}

/// Targets generated for `module`: main target, then resource bundle and
/// test bundle when the module calls for them.
pub fn synthesize_targets(
    graph: &ModuleGraph,
    module: &Module,
    context: &ProjectContext,
) -> Result<Vec<Target>, SynthesisError> {
    if let Some(wrapped) = module.wrapped_dependencies() {
        return Ok(vec![wrapper_target(module, wrapped, context)?]);
    }

    let resolved = graph.resolve(&module.name)?;

    let mut targets = vec![main_target(module, &resolved, context)?];
    if module.has_resource_bundle() {
        targets.push(resource_target(module, context)?);
    }
    if let Some(test) = test_target(module, &resolved, context)? {
        targets.push(test);
    }

    debug!(
        module = %module.name,
        targets = targets.len(),
        "Synthesized targets"
    );
    Ok(targets)
}

fn wrapper_target(
    module: &Module,
    wrapped: &[TargetDependency],
    context: &ProjectContext,
) -> Result<Target, ContextError> {
    let mut target = Target::new(
        module.name.target().to_string(),
        module.config.product.target_product(),
        context,
    )?;
    target.scripts = module.config.actions.clone();
    target.dependencies = wrapped.to_vec();
    // Only linked into other frameworks, never installed on its own
    target.settings = Settings::with_base(SettingsDictionary::from([(
        "SKIP_INSTALL".to_string(),
        SettingValue::from("YES"),
    )]));
    Ok(target)
}

fn main_target(
    module: &Module,
    resolved: &[TargetDependency],
    context: &ProjectContext,
) -> Result<Target, ContextError> {
    let config = &module.config;
    let mut target = Target::new(
        module.name.target().to_string(),
        config.product.target_product(),
        context,
    )?;

    target.sources = vec![context.sources_glob(&module.name)];
    // Static products ship resources through the sibling bundle instead
    if !config.product.is_static() {
        target.resources = vec![ResourceFileElement::Glob(
            context.resources_glob(&module.name),
        )];
    }
    target.headers = config.headers.clone();
    target.scripts = config.actions.clone();
    target.dependencies = resolved.to_vec();
    target.settings = config.settings.clone();
    target.additional_files = vec![context.readme(&module.name)];
    Ok(target)
}

fn resource_target(module: &Module, context: &ProjectContext) -> Result<Target, ContextError> {
    let mut target = Target::new(module.name.resources(), TargetProduct::Bundle, context)?;

    target.resources = module.config.additional_files.clone();
    target.resources.push(ResourceFileElement::Glob(
        context.resources_glob(&module.name),
    ));
    target.scripts = vec![TargetScript::remove_bundle_executable()];
    Ok(target)
}

fn test_target(
    module: &Module,
    resolved: &[TargetDependency],
    context: &ProjectContext,
) -> Result<Option<Target>, ContextError> {
    if !module.has_test_target() {
        return Ok(None);
    }
    let Some(tests) = &module.config.tests else {
        return Ok(None);
    };

    let mut dependencies = tests.dependencies.clone();
    dependencies.push(TargetDependency::module(&module.name));
    // Static products do not carry their dependencies along when linked
    if module.config.product.is_static() {
        dependencies.extend(resolved.iter().cloned());
    }
    if module.has_resource_bundle() {
        dependencies.push(TargetDependency::resources_of(&module.name));
    }

    let mut target = Target::new(module.name.tests(), TargetProduct::UnitTests, context)?;
    target.info_plist = InfoPlist::extending_default(tests.additional_info_plist.clone());
    target.sources = tests.additional_sources.clone();
    target.sources.push(context.tests_glob(&module.name));
    if tests.has_resources {
        target.resources = vec![ResourceFileElement::Glob(
            context.test_resources_glob(&module.name),
        )];
    }
    target.dependencies = dedup_preserving_order(dependencies);
    target.settings = tests.build_settings.clone();
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    include!("target.test.rs");
}
