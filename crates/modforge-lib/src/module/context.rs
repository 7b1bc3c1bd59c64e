//! Project-wide inputs to target synthesis: platform, on-disk module layout
//! and the bundle identifier template.

use super::name::ModuleName;
use super::values::Platform;
use handlebars::Handlebars;
use serde_json::json;
use thiserror::Error;

pub const DEFAULT_MODULES_ROOT: &str = "Modules";
pub const DEFAULT_BUNDLE_ID_TEMPLATE: &str = "com.example.{{name}}";

const BUNDLE_ID: &str = "bundle_id";

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Invalid bundle identifier template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("Failed to render bundle identifier for {target}: {source}")]
    BundleId {
        target: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

/// Shared settings every synthesized target is derived with
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub platform: Platform,
    pub modules_root: String,
    templates: Handlebars<'static>,
}

impl ProjectContext {
    /// The template sees `{{name}}` (target name) and `{{platform}}`
    pub fn new(
        platform: Platform,
        modules_root: impl Into<String>,
        bundle_id_template: &str,
    ) -> Result<Self, ContextError> {
        let invalid = |reason: String| ContextError::InvalidTemplate {
            template: bundle_id_template.to_string(),
            reason,
        };

        let mut templates = Handlebars::new();
        templates.set_strict_mode(true);
        templates.register_escape_fn(handlebars::no_escape);
        templates
            .register_template_string(BUNDLE_ID, bundle_id_template)
            .map_err(|e| invalid(e.to_string()))?;

        let context = Self {
            platform,
            modules_root: modules_root.into().trim_end_matches('/').to_string(),
            templates,
        };

        // Unknown variables only surface at render time under strict mode
        let sample = context.bundle_id("Sample").map_err(|e| invalid(e.to_string()))?;
        if sample.trim().is_empty() {
            return Err(invalid("renders to an empty identifier".to_string()));
        }

        Ok(context)
    }

    pub fn bundle_id(&self, target_name: &str) -> Result<String, ContextError> {
        self.templates
            .render(
                BUNDLE_ID,
                &json!({ "name": target_name, "platform": self.platform }),
            )
            .map_err(|source| ContextError::BundleId {
                target: target_name.to_string(),
                source: Box::new(source),
            })
    }

    pub fn module_path(&self, name: &ModuleName) -> String {
        format!("{}/{}", self.modules_root, name)
    }

    pub fn sources_glob(&self, name: &ModuleName) -> String {
        format!("{}/Sources/**", self.module_path(name))
    }

    pub fn resources_glob(&self, name: &ModuleName) -> String {
        format!("{}/Resources/**", self.module_path(name))
    }

    pub fn tests_glob(&self, name: &ModuleName) -> String {
        format!("{}/Tests/**", self.module_path(name))
    }

    pub fn test_resources_glob(&self, name: &ModuleName) -> String {
        format!("{}/TestResources/**", self.module_path(name))
    }

    pub fn readme(&self, name: &ModuleName) -> String {
        format!("{}/README.md", self.module_path(name))
    }
}

#[cfg(test)]
mod tests {
    include!("context.test.rs");
}
