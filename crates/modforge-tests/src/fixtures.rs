//! Manifest fixtures for E2E tests
//!
//! Each fixture exists in YAML and, where format parity is tested, TOML.

use anyhow::{Context, Result};
use serde_json::Value;

/// A single static module with resources and tests
pub const SINGLE_CORE_YAML: &str = r#"
project:
  name: Single
modules:
  - name: Core
"#;

/// `Feature` depends on `Core` and on a wrapper around two packages
pub const FEATURE_WITH_WRAPPER_YAML: &str = r#"
project:
  name: Shop
  packages:
    - remote:
        url: https://example.com/p.git
        version: "1.0.0"
modules:
  - name: Feature
    has_resources: false
    dependencies:
      - module: Core
      - module: ThirdPartyWrapper
  - name: Core
  - name: ThirdPartyWrapper
    product:
      wrapper:
        - package:
            product: P
        - package:
            product: Q
"#;

/// Same project as [`FEATURE_WITH_WRAPPER_YAML`]
pub const FEATURE_WITH_WRAPPER_TOML: &str = r#"
[project]
name = "Shop"

[[project.packages]]
remote = { url = "https://example.com/p.git", version = "1.0.0" }

[[modules]]
name = "Feature"
has_resources = false
dependencies = [{ module = "Core" }, { module = "ThirdPartyWrapper" }]

[[modules]]
name = "Core"

[[modules]]
name = "ThirdPartyWrapper"
product = { wrapper = [{ package = { product = "P" } }, { package = { product = "Q" } }] }
"#;

/// `A` and `B` both depend on `Core`, plus a hand-written app target
pub const SHARED_CORE_YAML: &str = r#"
project:
  name: Shared
  bundle_id_template: "org.shared.{{platform}}.{{name}}"
modules:
  - name: A
    tests: false
    dependencies:
      - module: Core
  - name: B
    tests: false
    dependencies:
      - module: Core
  - name: Core
    tests:
      has_resources: false
targets:
  - name: SharedApp
    product: app
    bundle_id: org.shared.app
    sources: ["App/Sources/**"]
    dependencies:
      - target:
          name: A
      - target:
          name: B
schemes:
  - name: SharedApp
    build_action:
      targets: [SharedApp]
"#;

/// `A → B → C → A`
pub const CYCLE_YAML: &str = r#"
project:
  name: Loop
modules:
  - name: A
    dependencies: [{ module: B }]
  - name: B
    dependencies: [{ module: C }]
  - name: C
    dependencies: [{ module: A }]
"#;

/// `Feature` names a module nobody declared
pub const MISSING_MODULE_YAML: &str = r#"
project:
  name: Broken
modules:
  - name: Feature
    dependencies: [{ module: Core }]
"#;

/// Parse generated descriptor JSON
pub fn parse_descriptor(json: &str) -> Result<Value> {
    serde_json::from_str(json).context("Generated descriptor is not valid JSON")
}

/// Target names in descriptor order
pub fn target_names(descriptor: &Value) -> Vec<String> {
    names(&descriptor["targets"])
}

/// Scheme names in descriptor order
pub fn scheme_names(descriptor: &Value) -> Vec<String> {
    names(&descriptor["schemes"])
}

/// Find a target by name
pub fn target<'a>(descriptor: &'a Value, name: &str) -> Option<&'a Value> {
    descriptor["targets"]
        .as_array()?
        .iter()
        .find(|target| target["name"] == name)
}

/// `"target:<name>"`-style rendering of a target's dependency list
pub fn dependency_names(target: &Value) -> Vec<String> {
    target["dependencies"]
        .as_array()
        .map(|deps| {
            deps.iter()
                .map(|dep| match dep.as_object().and_then(|obj| obj.iter().next()) {
                    Some((kind, body)) => {
                        let label = body
                            .get("name")
                            .or_else(|| body.get("product"))
                            .and_then(Value::as_str)
                            .unwrap_or_default();
                        format!("{kind}:{label}")
                    }
                    None => String::new(),
                })
                .collect()
        })
        .unwrap_or_default()
}

fn names(list: &Value) -> Vec<String> {
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["name"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
