use super::*;
use crate::module::config::{ModuleConfig, Product, TestConfig};
use crate::module::context::DEFAULT_BUNDLE_ID_TEMPLATE;
use crate::module::dependency::Dependency;
use crate::module::name::ModuleName;
use serde_json::json;
use std::collections::BTreeMap;

fn context() -> ProjectContext {
    ProjectContext::new(Platform::Ios, "Modules", DEFAULT_BUNDLE_ID_TEMPLATE).unwrap()
}

fn targets_for(modules: Vec<Module>, name: &str) -> Vec<Target> {
    let graph = ModuleGraph::new(modules).unwrap();
    let module = graph.get(&ModuleName::new(name)).unwrap();
    synthesize_targets(&graph, module, &context()).unwrap()
}

fn names(targets: &[Target]) -> Vec<&str> {
    targets.iter().map(|t| t.name.as_str()).collect()
}

fn dep(name: &str) -> TargetDependency {
    TargetDependency::target(name)
}

#[test]
fn test_static_module_with_resources_and_tests() {
    let targets = targets_for(vec![Module::new("Core", ModuleConfig::default())], "Core");
    assert_eq!(names(&targets), ["Core", "CoreResources", "CoreTests"]);

    let main = &targets[0];
    assert_eq!(main.product, TargetProduct::StaticFramework);
    assert_eq!(main.bundle_id, "com.example.Core");
    assert_eq!(main.sources, vec!["Modules/Core/Sources/**".to_string()]);
    assert!(main.resources.is_empty());
    assert_eq!(main.dependencies, vec![dep("CoreResources")]);
    assert_eq!(main.additional_files, vec!["Modules/Core/README.md".to_string()]);

    let bundle = &targets[1];
    assert_eq!(bundle.product, TargetProduct::Bundle);
    assert_eq!(bundle.bundle_id, "com.example.CoreResources");
    assert!(bundle.dependencies.is_empty());
    assert_eq!(
        bundle.resources,
        vec![ResourceFileElement::Glob("Modules/Core/Resources/**".to_string())]
    );
    assert_eq!(bundle.scripts, vec![TargetScript::remove_bundle_executable()]);

    let tests = &targets[2];
    assert_eq!(tests.product, TargetProduct::UnitTests);
    assert_eq!(tests.sources, vec!["Modules/Core/Tests/**".to_string()]);
    assert_eq!(
        tests.resources,
        vec![ResourceFileElement::Glob(
            "Modules/Core/TestResources/**".to_string()
        )]
    );
    assert_eq!(tests.dependencies, vec![dep("Core"), dep("CoreResources")]);
}

#[test]
fn test_static_without_resources_has_no_bundle() {
    let module = Module::new("Core", ModuleConfig::default().with_resources(false));
    let targets = targets_for(vec![module], "Core");
    assert_eq!(names(&targets), ["Core", "CoreTests"]);
}

#[test]
fn test_no_tests_config_means_no_test_target() {
    let module = Module::new("Core", ModuleConfig::default().with_tests(None));
    let targets = targets_for(vec![module], "Core");
    assert_eq!(names(&targets), ["Core", "CoreResources"]);
}

#[test]
fn test_dynamic_module_embeds_resources() {
    let module = Module::new(
        "UI",
        ModuleConfig::default().with_product(Product::Dynamic),
    );
    let targets = targets_for(vec![module], "UI");
    assert_eq!(names(&targets), ["UI", "UITests"]);

    let main = &targets[0];
    assert_eq!(main.product, TargetProduct::Framework);
    assert_eq!(
        main.resources,
        vec![ResourceFileElement::Glob("Modules/UI/Resources/**".to_string())]
    );
    assert_eq!(targets[1].dependencies, vec![dep("UI")]);
}

#[test]
fn test_custom_product_passes_through() {
    let module = Module::new(
        "App",
        ModuleConfig::default()
            .with_product(Product::Custom(TargetProduct::App))
            .with_tests(None),
    );
    let targets = targets_for(vec![module], "App");
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].product, TargetProduct::App);
    assert!(!targets[0].resources.is_empty());
}

#[test]
fn test_wrapper_synthesizes_single_framework() {
    let mut module = Module::new(
        "ThirdPartyWrapper",
        ModuleConfig::default().with_product(Product::Wrapper(vec![
            TargetDependency::package("P"),
            TargetDependency::package("Q"),
        ])),
    );
    module.config.actions = vec![TargetScript {
        name: "Lint".to_string(),
        script: "swiftlint".to_string(),
        order: Default::default(),
    }];

    let targets = targets_for(vec![module], "ThirdPartyWrapper");
    assert_eq!(targets.len(), 1);

    let wrapper = &targets[0];
    assert_eq!(wrapper.product, TargetProduct::Framework);
    assert_eq!(
        wrapper.dependencies,
        vec![TargetDependency::package("P"), TargetDependency::package("Q")]
    );
    assert_eq!(wrapper.settings.base["SKIP_INSTALL"], SettingValue::from("YES"));
    assert!(wrapper.sources.is_empty());
    assert_eq!(wrapper.scripts.len(), 1);
}

#[test]
fn test_static_test_target_pulls_in_resolved_dependencies() {
    let feature = Module::new(
        "Feature",
        ModuleConfig::default()
            .with_dependencies(vec![
                Dependency::module("Core"),
                Dependency::target(TargetDependency::package("Nuke")),
            ])
            .with_tests(Some(TestConfig {
                dependencies: vec![dep("TestSupport"), dep("Core")],
                ..TestConfig::default()
            })),
    );
    let core = Module::new("Core", ModuleConfig::default());

    let targets = targets_for(vec![feature, core], "Feature");
    let tests = targets.iter().find(|t| t.name == "FeatureTests").unwrap();

    assert_eq!(
        tests.dependencies,
        vec![
            dep("TestSupport"),
            dep("Core"),
            dep("Feature"),
            dep("CoreResources"),
            TargetDependency::package("Nuke"),
            dep("FeatureResources"),
        ]
    );
}

#[test]
fn test_dynamic_test_target_does_not_pull_in_resolved_dependencies() {
    let feature = Module::new(
        "Feature",
        ModuleConfig::default()
            .with_product(Product::Dynamic)
            .with_dependencies(vec![Dependency::module("Core")]),
    );
    let core = Module::new("Core", ModuleConfig::default());

    let targets = targets_for(vec![feature, core], "Feature");
    assert_eq!(targets[0].dependencies, vec![dep("Core"), dep("CoreResources")]);
    assert_eq!(targets[1].dependencies, vec![dep("Feature")]);
}

#[test]
fn test_test_config_pass_through() {
    let mut settings = SettingsDictionary::new();
    settings.insert("ENABLE_TESTING_SEARCH_PATHS".to_string(), "YES".into());

    let mut plist = BTreeMap::new();
    plist.insert("NSCameraUsageDescription".to_string(), json!("tests"));

    let module = Module::new(
        "Core",
        ModuleConfig::default().with_tests(Some(TestConfig {
            additional_sources: vec!["Shared/Mocks/**".to_string()],
            has_resources: false,
            build_settings: Settings::with_base(settings.clone()),
            additional_info_plist: plist.clone(),
            ..TestConfig::default()
        })),
    );

    let targets = targets_for(vec![module], "Core");
    let tests = &targets[2];
    assert_eq!(
        tests.sources,
        vec!["Shared/Mocks/**".to_string(), "Modules/Core/Tests/**".to_string()]
    );
    assert!(tests.resources.is_empty());
    assert_eq!(tests.settings.base, settings);
    assert_eq!(tests.info_plist, InfoPlist::ExtendingDefault(plist));
}

#[test]
fn test_additional_files_land_in_bundle() {
    let mut module = Module::new("Core", ModuleConfig::default());
    module.config.additional_files =
        vec![ResourceFileElement::FolderReference("Shared/Fonts".to_string())];

    let targets = targets_for(vec![module], "Core");
    assert_eq!(
        targets[1].resources,
        vec![
            ResourceFileElement::FolderReference("Shared/Fonts".to_string()),
            ResourceFileElement::Glob("Modules/Core/Resources/**".to_string()),
        ]
    );
}

#[test]
fn test_main_target_serializes_without_empty_fields() {
    let module = Module::new(
        "Core",
        ModuleConfig::default().with_resources(false).with_tests(None),
    );
    let targets = targets_for(vec![module], "Core");

    let value = serde_json::to_value(&targets[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Core",
            "platform": "ios",
            "product": "static_framework",
            "bundle_id": "com.example.Core",
            "info_plist": "default",
            "sources": ["Modules/Core/Sources/**"],
            "additional_files": ["Modules/Core/README.md"]
        })
    );
}
