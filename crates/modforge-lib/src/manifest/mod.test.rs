// Tests for manifest parsing and plan construction

use super::*;
use crate::module::{ModuleName, Product, TargetDependency};
use std::fs;
use tempfile::TempDir;

const YAML_MANIFEST: &str = r#"
project:
  name: Shop
  platform: ios
  bundle_id_template: "com.shop.{{name}}"
  packages:
    - remote:
        url: https://github.com/kean/Nuke
        version: "12.0.0"
  additional_files:
    - README.md
modules:
  - name: Core
  - name: Feature
    has_resources: false
    dependencies:
      - module: Core
      - module: ThirdPartyWrapper
  - name: ThirdPartyWrapper
    product:
      wrapper:
        - package:
            product: P
        - package:
            product: Q
targets:
  - name: ShopApp
    product: app
    bundle_id: com.shop.app
    dependencies:
      - target:
          name: Feature
schemes:
  - name: ShopApp
    build_action:
      targets: [ShopApp]
"#;

const TOML_MANIFEST: &str = r#"
[project]
name = "Shop"
modules_root = "Packages"

[[modules]]
name = "Core"
tests = false

[[modules]]
name = "Feature"
product = "dynamic"
dependencies = [{ module = "Core" }, { target = { package = { product = "Nuke" } } }]

[modules.tests]
has_resources = false
"#;

fn path(name: &str) -> PathBuf {
    PathBuf::from(name)
}

#[test]
fn test_format_from_extension() {
    assert_eq!(
        ManifestFormat::from_path(&path("modforge.yml")).unwrap(),
        ManifestFormat::Yaml
    );
    assert_eq!(
        ManifestFormat::from_path(&path("modforge.yaml")).unwrap(),
        ManifestFormat::Yaml
    );
    assert_eq!(
        ManifestFormat::from_path(&path("modforge.toml")).unwrap(),
        ManifestFormat::Toml
    );
    assert!(matches!(
        ManifestFormat::from_path(&path("modforge.json")),
        Err(ManifestError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_parse_yaml_manifest() {
    let manifest = Manifest::parse(YAML_MANIFEST, ManifestFormat::Yaml, &path("m.yml")).unwrap();

    assert_eq!(manifest.project.name, "Shop");
    assert_eq!(manifest.project.bundle_id_template, "com.shop.{{name}}");
    assert_eq!(manifest.project.modules_root, "Modules");
    assert_eq!(manifest.project.packages.len(), 1);
    assert_eq!(manifest.modules.len(), 3);
    assert_eq!(manifest.targets.len(), 1);
    assert_eq!(manifest.schemes.len(), 1);

    let wrapper = &manifest.modules[2];
    assert_eq!(
        wrapper.config.product,
        Product::Wrapper(vec![
            TargetDependency::package("P"),
            TargetDependency::package("Q"),
        ])
    );
}

#[test]
fn test_parse_toml_manifest() {
    let manifest = Manifest::parse(TOML_MANIFEST, ManifestFormat::Toml, &path("m.toml")).unwrap();

    assert_eq!(manifest.project.modules_root, "Packages");
    assert_eq!(manifest.modules[0].config.tests, None);

    let feature = &manifest.modules[1];
    assert_eq!(feature.config.product, Product::Dynamic);
    assert_eq!(feature.config.dependencies.len(), 2);
    assert!(!feature.config.tests.as_ref().unwrap().has_resources);
}

#[test]
fn test_yaml_plan_assembles_scenario() {
    let plan = Manifest::parse(YAML_MANIFEST, ManifestFormat::Yaml, &path("m.yml"))
        .unwrap()
        .into_plan()
        .unwrap();

    let resolved = plan.graph.resolve(&ModuleName::new("Feature")).unwrap();
    assert_eq!(
        resolved,
        vec![
            TargetDependency::target("Core"),
            TargetDependency::target("ThirdPartyWrapper"),
            TargetDependency::target("CoreResources"),
        ]
    );

    let project = plan.assemble().unwrap();
    assert_eq!(project.name, "Shop");
    assert_eq!(project.target("Core").unwrap().bundle_id, "com.shop.Core");
    assert_eq!(project.targets.last().unwrap().name, "ShopApp");
    assert_eq!(project.schemes.first().unwrap().name, "ShopApp");
    assert_eq!(project.additional_files, vec!["README.md".to_string()]);
}

#[test]
fn test_invalid_graph_is_reported() {
    let manifest = r#"
project:
  name: Broken
modules:
  - name: A
    dependencies:
      - module: B
  - name: B
    dependencies:
      - module: A
"#;
    let result = Manifest::parse(manifest, ManifestFormat::Yaml, &path("m.yml"))
        .unwrap()
        .into_plan();

    match result {
        Err(ManifestError::GraphError {
            source: ModuleGraphError::CircularDependency { .. },
        }) => {}
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn test_extra_target_named_like_a_module_is_reported() {
    let manifest = r#"
project:
  name: Shop
modules:
  - name: Core
targets:
  - name: Core
    product: app
    bundle_id: com.shop.core
"#;
    let result = Manifest::parse(manifest, ManifestFormat::Yaml, &path("m.yml"))
        .unwrap()
        .into_plan();

    match result {
        Err(ManifestError::GraphError {
            source: ModuleGraphError::TargetCollision { name, .. },
        }) => assert_eq!(name, "Core"),
        other => panic!("expected target collision, got {other:?}"),
    }
}

#[test]
fn test_invalid_bundle_template_is_reported() {
    let manifest = r#"
project:
  name: Broken
  bundle_id_template: "com.example.{{nme}}"
"#;
    let result = Manifest::parse(manifest, ManifestFormat::Yaml, &path("m.yml"))
        .unwrap()
        .into_plan();
    assert!(matches!(result, Err(ManifestError::ContextError(_))));
}

#[test]
fn test_malformed_yaml_is_reported() {
    let result = Manifest::parse("project: [", ManifestFormat::Yaml, &path("broken.yml"));
    match result {
        Err(ManifestError::YamlError { path, .. }) => assert_eq!(path, PathBuf::from("broken.yml")),
        other => panic!("expected YAML error, got {other:?}"),
    }
}

#[test]
fn test_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let manifest_path = dir.path().join("modforge.toml");
    fs::write(&manifest_path, TOML_MANIFEST).unwrap();

    let plan = ProjectPlan::load(&manifest_path).unwrap();
    assert_eq!(plan.graph.len(), 2);
    assert_eq!(plan.context.modules_root, "Packages");
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = Manifest::load(&dir.path().join("modforge.yml"));
    assert!(matches!(result, Err(ManifestError::ReadError { .. })));
}
