//! Dependency edges: what a module declares and what a target ends up with

use super::name::ModuleName;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Linking requirement of an SDK dependency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SdkStatus {
    #[default]
    Required,
    Optional,
}

/// Resolved dependency edge of a generated target.
///
/// Module references resolve to [`TargetDependency::Target`] naming the
/// module's main target, so two edges are equal exactly when they denote
/// the same effective artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetDependency {
    /// Target in the same project
    Target { name: String },
    /// Target in another project
    Project { target: String, path: String },
    /// Product of a package dependency
    Package { product: String },
    /// System SDK
    Sdk {
        name: String,
        #[serde(default)]
        status: SdkStatus,
    },
    /// Prebuilt framework on disk
    Framework { path: String },
    /// Prebuilt xcframework on disk
    Xcframework { path: String },
}

impl TargetDependency {
    pub fn target(name: impl Into<String>) -> Self {
        Self::Target { name: name.into() }
    }

    /// Edge onto a module's main target
    pub fn module(name: &ModuleName) -> Self {
        Self::target(name.target())
    }

    /// Edge onto a module's resource bundle
    pub fn resources_of(name: &ModuleName) -> Self {
        Self::target(name.resources())
    }

    pub fn package(product: impl Into<String>) -> Self {
        Self::Package {
            product: product.into(),
        }
    }
}

impl fmt::Display for TargetDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target { name } => write!(f, "target:{name}"),
            Self::Project { target, path } => write!(f, "project:{path}#{target}"),
            Self::Package { product } => write!(f, "package:{product}"),
            Self::Sdk { name, .. } => write!(f, "sdk:{name}"),
            Self::Framework { path } => write!(f, "framework:{path}"),
            Self::Xcframework { path } => write!(f, "xcframework:{path}"),
        }
    }
}

/// Dependency as declared in a module's configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dependency {
    /// Another module of the same graph, by name
    Module(ModuleName),
    /// Anything that is not a module; passed through unchanged
    Target(TargetDependency),
}

impl Dependency {
    pub fn module(name: impl Into<ModuleName>) -> Self {
        Self::Module(name.into())
    }

    pub fn target(dependency: TargetDependency) -> Self {
        Self::Target(dependency)
    }

    pub fn as_module(&self) -> Option<&ModuleName> {
        match self {
            Self::Module(name) => Some(name),
            Self::Target(_) => None,
        }
    }

    pub fn as_target(&self) -> Option<&TargetDependency> {
        match self {
            Self::Module(_) => None,
            Self::Target(dependency) => Some(dependency),
        }
    }
}

/// Drop repeated edges, keeping each at its first position
pub fn dedup_preserving_order<I>(dependencies: I) -> Vec<TargetDependency>
where
    I: IntoIterator<Item = TargetDependency>,
{
    let mut seen = HashSet::new();
    dependencies
        .into_iter()
        .filter(|dep| seen.insert(dep.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    include!("dependency.test.rs");
}
