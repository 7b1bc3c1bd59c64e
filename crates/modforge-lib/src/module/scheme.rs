//! Scheme synthesis

use super::config::Module;
use serde::{Deserialize, Serialize};

fn default_shared() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildAction {
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAction {
    pub targets: Vec<String>,
}

/// Named grouping of build and test actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    #[serde(default = "default_shared")]
    pub shared: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_action: Option<BuildAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_action: Option<TestAction>,
}

/// Hidden shared scheme for the module, plus an action-less scheme exposing
/// the resource bundle when there is one.
pub fn synthesize_schemes(module: &Module) -> Vec<Scheme> {
    let name = &module.name;

    let mut schemes = vec![Scheme {
        name: name.target().to_string(),
        shared: true,
        hidden: true,
        build_action: Some(BuildAction {
            targets: vec![name.target().to_string()],
        }),
        test_action: module.has_test_target().then(|| TestAction {
            targets: vec![name.tests()],
        }),
    }];

    if module.has_resource_bundle() {
        schemes.push(Scheme {
            name: name.resources(),
            shared: true,
            hidden: true,
            build_action: None,
            test_action: None,
        });
    }

    schemes
}

#[cfg(test)]
mod tests {
    include!("scheme.test.rs");
}
