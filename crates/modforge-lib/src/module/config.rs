//! Module descriptor: identity plus the configuration driving its targets

use super::dependency::{Dependency, TargetDependency};
use super::name::ModuleName;
use super::values::{Headers, ResourceFileElement, Settings, TargetProduct, TargetScript};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// What a module's main target builds
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    /// Dynamic framework
    Dynamic,
    /// Static framework; resources ship in a sibling bundle
    #[default]
    Static,
    /// Any other product kind
    Custom(TargetProduct),
    /// Framework that only re-exports externally built dependencies (usually
    /// package products) so several modules can link them without duplicate
    /// symbols. Terminal in the module graph.
    Wrapper(Vec<TargetDependency>),
}

impl Product {
    /// Product of the generated main target
    pub fn target_product(&self) -> TargetProduct {
        match self {
            Product::Dynamic | Product::Wrapper(_) => TargetProduct::Framework,
            Product::Static => TargetProduct::StaticFramework,
            Product::Custom(product) => *product,
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            Product::Dynamic | Product::Wrapper(_) => false,
            Product::Static => true,
            Product::Custom(product) => product.is_static(),
        }
    }
}

/// Test target configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    /// Extra dependencies beyond the module itself and its resource bundle
    pub dependencies: Vec<TargetDependency>,
    /// Extra source globs, e.g. shared mocks
    pub additional_sources: Vec<String>,
    /// Whether `TestResources/` is attached to the test target
    pub has_resources: bool,
    pub build_settings: Settings,
    /// Keys merged into the default Info.plist
    pub additional_info_plist: BTreeMap<String, serde_json::Value>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            dependencies: Vec::new(),
            additional_sources: Vec::new(),
            has_resources: true,
            build_settings: Settings::default(),
            additional_info_plist: BTreeMap::new(),
        }
    }
}

/// Configuration of a module
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    pub product: Product,
    /// Declared dependencies, order-sensitive
    pub dependencies: Vec<Dependency>,
    pub headers: Option<Headers>,
    /// Build-phase scripts
    pub actions: Vec<TargetScript>,
    /// Extra resources for the module's resource bundle
    pub additional_files: Vec<ResourceFileElement>,
    /// Only honoured for static products
    pub has_resources: bool,
    /// `None` means no test target
    #[serde(deserialize_with = "deserialize_tests")]
    pub tests: Option<TestConfig>,
    pub settings: Settings,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            product: Product::Static,
            dependencies: Vec::new(),
            headers: None,
            actions: Vec::new(),
            additional_files: Vec::new(),
            has_resources: true,
            tests: Some(TestConfig::default()),
            settings: Settings::default(),
        }
    }
}

impl ModuleConfig {
    pub fn with_product(mut self, product: Product) -> Self {
        self.product = product;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<Dependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_resources(mut self, has_resources: bool) -> Self {
        self.has_resources = has_resources;
        self
    }

    pub fn with_tests(mut self, tests: Option<TestConfig>) -> Self {
        self.tests = tests;
        self
    }
}

/// `tests` accepts `false`/`null` (no tests), `true` (defaults) or a table
fn deserialize_tests<'de, D>(deserializer: D) -> Result<Option<TestConfig>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Toggle {
        Enabled(bool),
        Config(TestConfig),
    }

    Ok(match Option::<Toggle>::deserialize(deserializer)? {
        None | Some(Toggle::Enabled(false)) => None,
        Some(Toggle::Enabled(true)) => Some(TestConfig::default()),
        Some(Toggle::Config(config)) => Some(config),
    })
}

/// A named unit of sources, resources and tests.
///
/// Equality and hashing consider the name only.
#[derive(Debug, Clone, Deserialize)]
pub struct Module {
    pub name: ModuleName,
    #[serde(flatten)]
    pub config: ModuleConfig,
}

impl Module {
    pub fn new(name: impl Into<ModuleName>, config: ModuleConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    pub fn is_wrapper(&self) -> bool {
        matches!(self.config.product, Product::Wrapper(_))
    }

    /// Dependencies a wrapper module forwards to its framework
    pub fn wrapped_dependencies(&self) -> Option<&[TargetDependency]> {
        match &self.config.product {
            Product::Wrapper(dependencies) => Some(dependencies),
            _ => None,
        }
    }

    /// Static, non-wrapper modules with resources get a sibling bundle
    pub fn has_resource_bundle(&self) -> bool {
        !self.is_wrapper() && self.config.product.is_static() && self.config.has_resources
    }

    pub fn has_test_target(&self) -> bool {
        !self.is_wrapper() && self.config.tests.is_some()
    }

    /// Names of declared module dependencies, in declaration order
    pub fn module_dependencies(&self) -> impl Iterator<Item = &ModuleName> {
        self.config.dependencies.iter().filter_map(Dependency::as_module)
    }

    /// Declared non-module dependencies, in declaration order
    pub fn target_dependencies(&self) -> impl Iterator<Item = &TargetDependency> {
        self.config.dependencies.iter().filter_map(Dependency::as_target)
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Module {}

impl Hash for Module {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
