use super::*;
use serde_json::json;
use std::collections::HashSet;

#[test]
fn test_default_config() {
    let config = ModuleConfig::default();
    assert_eq!(config.product, Product::Static);
    assert!(config.dependencies.is_empty());
    assert!(config.has_resources);
    assert_eq!(config.tests, Some(TestConfig::default()));
    assert!(config.tests.as_ref().unwrap().has_resources);
}

#[test]
fn test_product_mapping() {
    assert_eq!(Product::Dynamic.target_product(), TargetProduct::Framework);
    assert_eq!(Product::Static.target_product(), TargetProduct::StaticFramework);
    assert_eq!(
        Product::Custom(TargetProduct::App).target_product(),
        TargetProduct::App
    );
    assert_eq!(
        Product::Wrapper(vec![TargetDependency::package("Nuke")]).target_product(),
        TargetProduct::Framework
    );
}

#[test]
fn test_product_staticness() {
    assert!(Product::Static.is_static());
    assert!(!Product::Dynamic.is_static());
    assert!(!Product::Wrapper(Vec::new()).is_static());
    assert!(Product::Custom(TargetProduct::StaticLibrary).is_static());
    assert!(!Product::Custom(TargetProduct::App).is_static());
}

#[test]
fn test_module_identity_is_name_only() {
    let a = Module::new("Core", ModuleConfig::default());
    let b = Module::new(
        "Core",
        ModuleConfig::default().with_product(Product::Dynamic),
    );
    assert_eq!(a, b);

    let mut set = HashSet::new();
    set.insert(a);
    assert!(!set.insert(b));
}

#[test]
fn test_resource_bundle_only_for_static_modules() {
    let static_module = Module::new("Core", ModuleConfig::default());
    assert!(static_module.has_resource_bundle());

    let without_resources = Module::new("Core", ModuleConfig::default().with_resources(false));
    assert!(!without_resources.has_resource_bundle());

    let dynamic = Module::new("Core", ModuleConfig::default().with_product(Product::Dynamic));
    assert!(!dynamic.has_resource_bundle());

    let wrapper = Module::new(
        "Wrapper",
        ModuleConfig::default().with_product(Product::Wrapper(Vec::new())),
    );
    assert!(!wrapper.has_resource_bundle());
    assert!(!wrapper.has_test_target());
}

#[test]
fn test_dependency_partition_keeps_order() {
    let module = Module::new(
        "Feature",
        ModuleConfig::default().with_dependencies(vec![
            Dependency::module("Core"),
            Dependency::target(TargetDependency::package("Nuke")),
            Dependency::module("Analytics"),
            Dependency::target(TargetDependency::target("Legacy")),
        ]),
    );

    let modules: Vec<_> = module.module_dependencies().map(ModuleName::as_str).collect();
    assert_eq!(modules, ["Core", "Analytics"]);

    let targets: Vec<_> = module.target_dependencies().cloned().collect();
    assert_eq!(
        targets,
        vec![
            TargetDependency::package("Nuke"),
            TargetDependency::target("Legacy"),
        ]
    );
}

#[test]
fn test_deserialize_module_with_defaults() {
    let module: Module = serde_json::from_value(json!({ "name": "Core" })).unwrap();
    assert_eq!(module.name.as_str(), "Core");
    assert_eq!(module.config, ModuleConfig::default());
}

#[test]
fn test_deserialize_tests_toggle() {
    let disabled: Module =
        serde_json::from_value(json!({ "name": "A", "tests": false })).unwrap();
    assert_eq!(disabled.config.tests, None);

    let null: Module = serde_json::from_value(json!({ "name": "A", "tests": null })).unwrap();
    assert_eq!(null.config.tests, None);

    let enabled: Module = serde_json::from_value(json!({ "name": "A", "tests": true })).unwrap();
    assert_eq!(enabled.config.tests, Some(TestConfig::default()));

    let configured: Module = serde_json::from_value(json!({
        "name": "A",
        "tests": {
            "dependencies": [{ "target": { "name": "TestSupport" } }],
            "has_resources": false
        }
    }))
    .unwrap();
    let tests = configured.config.tests.unwrap();
    assert_eq!(tests.dependencies, vec![TargetDependency::target("TestSupport")]);
    assert!(!tests.has_resources);
}

#[test]
fn test_deserialize_products() {
    let wrapper: Module = serde_json::from_value(json!({
        "name": "FirebaseWrapper",
        "product": { "wrapper": [
            { "package": { "product": "FirebaseAnalytics" } },
            { "package": { "product": "FirebaseCrashlytics" } }
        ] }
    }))
    .unwrap();
    assert!(wrapper.is_wrapper());
    assert_eq!(wrapper.wrapped_dependencies().map(<[_]>::len), Some(2));

    let custom: Module = serde_json::from_value(json!({
        "name": "App",
        "product": { "custom": "app" }
    }))
    .unwrap();
    assert_eq!(custom.config.product, Product::Custom(TargetProduct::App));

    let dynamic: Module =
        serde_json::from_value(json!({ "name": "UI", "product": "dynamic" })).unwrap();
    assert_eq!(dynamic.config.product, Product::Dynamic);
}
