use super::*;
use crate::module::config::{ModuleConfig, Product};
use crate::module::dependency::TargetDependency;
use serde_json::json;

#[test]
fn test_static_module_schemes() {
    let schemes = synthesize_schemes(&Module::new("Core", ModuleConfig::default()));
    assert_eq!(schemes.len(), 2);

    let main = &schemes[0];
    assert_eq!(main.name, "Core");
    assert!(main.shared);
    assert!(main.hidden);
    assert_eq!(
        main.build_action,
        Some(BuildAction {
            targets: vec!["Core".to_string()]
        })
    );
    assert_eq!(
        main.test_action,
        Some(TestAction {
            targets: vec!["CoreTests".to_string()]
        })
    );

    let resources = &schemes[1];
    assert_eq!(resources.name, "CoreResources");
    assert!(resources.hidden);
    assert!(resources.build_action.is_none());
    assert!(resources.test_action.is_none());
}

#[test]
fn test_wrapper_gets_build_only_scheme() {
    let module = Module::new(
        "Firebase",
        ModuleConfig::default().with_product(Product::Wrapper(vec![TargetDependency::package(
            "FirebaseAnalytics",
        )])),
    );

    let schemes = synthesize_schemes(&module);
    assert_eq!(schemes.len(), 1);
    assert_eq!(schemes[0].name, "Firebase");
    assert!(schemes[0].build_action.is_some());
    assert!(schemes[0].test_action.is_none());
}

#[test]
fn test_module_without_tests_or_bundle() {
    let module = Module::new(
        "UI",
        ModuleConfig::default()
            .with_product(Product::Dynamic)
            .with_tests(None),
    );

    let schemes = synthesize_schemes(&module);
    assert_eq!(schemes.len(), 1);
    assert!(schemes[0].test_action.is_none());
}

#[test]
fn test_manifest_scheme_defaults() {
    let scheme: Scheme = serde_json::from_value(json!({ "name": "App" })).unwrap();
    assert!(scheme.shared);
    assert!(!scheme.hidden);
    assert!(scheme.build_action.is_none());
}
