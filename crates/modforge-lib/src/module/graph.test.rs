// Tests for module graph validation and dependency resolution

use super::*;
use crate::module::config::{ModuleConfig, Product};
use crate::module::dependency::Dependency;

// ============================================================================
// Test Utilities
// ============================================================================

fn name(value: &str) -> ModuleName {
    ModuleName::new(value)
}

fn target(value: &str) -> TargetDependency {
    TargetDependency::target(value)
}

/// Static module with resources and the given module dependencies
fn static_module(module: &str, deps: &[&str]) -> Module {
    Module::new(
        module,
        ModuleConfig::default()
            .with_dependencies(deps.iter().map(|d| Dependency::module(*d)).collect()),
    )
}

/// Static module without resources
fn plain_module(module: &str, deps: &[&str]) -> Module {
    let mut module = static_module(module, deps);
    module.config.has_resources = false;
    module
}

fn wrapper(module: &str, wrapped: &[&str]) -> Module {
    Module::new(
        module,
        ModuleConfig::default().with_product(Product::Wrapper(
            wrapped.iter().map(|p| TargetDependency::package(*p)).collect(),
        )),
    )
}

fn graph(modules: Vec<Module>) -> ModuleGraph {
    ModuleGraph::new(modules).unwrap()
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_leaf_without_resources_resolves_empty() {
    let graph = graph(vec![plain_module("Core", &[])]);
    assert!(graph.resolve(&name("Core")).unwrap().is_empty());
}

#[test]
fn test_static_module_depends_on_own_bundle_last() {
    let graph = graph(vec![
        plain_module("Util", &[]),
        static_module("Core", &["Util"]),
    ]);

    let resolved = graph.resolve(&name("Core")).unwrap();
    assert_eq!(resolved, vec![target("Util"), target("CoreResources")]);
    assert_eq!(
        resolved
            .iter()
            .filter(|dep| **dep == target("CoreResources"))
            .count(),
        1
    );
}

#[test]
fn test_dynamic_module_has_no_bundle_edge() {
    let graph = graph(vec![Module::new(
        "UI",
        ModuleConfig::default().with_product(Product::Dynamic),
    )]);
    assert!(graph.resolve(&name("UI")).unwrap().is_empty());
}

#[test]
fn test_core_scenario() {
    let graph = graph(vec![static_module("Core", &[])]);
    assert_eq!(
        graph.resolve(&name("Core")).unwrap(),
        vec![target("CoreResources")]
    );
}

#[test]
fn test_feature_scenario_excludes_wrapped_dependencies() {
    let graph = graph(vec![
        static_module("Core", &[]),
        wrapper("ThirdPartyWrapper", &["P", "Q"]),
        plain_module("Feature", &["Core", "ThirdPartyWrapper"]),
    ]);

    let resolved = graph.resolve(&name("Feature")).unwrap();
    assert_eq!(
        resolved,
        vec![
            target("Core"),
            target("ThirdPartyWrapper"),
            target("CoreResources"),
        ]
    );
    assert!(!resolved.contains(&TargetDependency::package("P")));
    assert!(!resolved.contains(&TargetDependency::package("Q")));
}

#[test]
fn test_wrapper_resolves_empty() {
    let graph = graph(vec![wrapper("Firebase", &["FirebaseAnalytics"])]);
    assert!(graph.resolve(&name("Firebase")).unwrap().is_empty());
}

#[test]
fn test_wrapper_module_dependencies_are_not_inherited() {
    let mut firebase = wrapper("Firebase", &["FirebaseAnalytics"]);
    firebase.config.dependencies = vec![Dependency::module("Logging")];

    let graph = graph(vec![
        plain_module("Logging", &[]),
        firebase,
        plain_module("App", &["Firebase"]),
    ]);

    assert_eq!(
        graph.resolve(&name("App")).unwrap(),
        vec![target("Firebase")]
    );
}

#[test]
fn test_transitive_chain() {
    let graph = graph(vec![
        plain_module("A", &["B"]),
        plain_module("B", &["C"]),
        plain_module("C", &["D"]),
        plain_module("D", &[]),
    ]);

    assert_eq!(
        graph.resolve(&name("A")).unwrap(),
        vec![target("B"), target("C"), target("D")]
    );
}

#[test]
fn test_diamond_appears_once_at_first_discovery() {
    let graph = graph(vec![
        plain_module("App", &["Left", "Right"]),
        plain_module("Left", &["Shared"]),
        plain_module("Right", &["Shared", "Extra"]),
        plain_module("Shared", &[]),
        plain_module("Extra", &[]),
    ]);

    assert_eq!(
        graph.resolve(&name("App")).unwrap(),
        vec![
            target("Left"),
            target("Right"),
            target("Shared"),
            target("Extra"),
        ]
    );
}

#[test]
fn test_duplicate_declarations_collapse() {
    let module = Module::new(
        "App",
        ModuleConfig::default()
            .with_resources(false)
            .with_dependencies(vec![
                Dependency::module("Core"),
                Dependency::target(TargetDependency::package("Nuke")),
                Dependency::module("Core"),
                Dependency::target(TargetDependency::package("Nuke")),
            ]),
    );
    let graph = graph(vec![module, plain_module("Core", &[])]);

    assert_eq!(
        graph.resolve(&name("App")).unwrap(),
        vec![target("Core"), TargetDependency::package("Nuke")]
    );
}

#[test]
fn test_target_dependencies_follow_module_edges_in_declared_order() {
    let module = Module::new(
        "App",
        ModuleConfig::default().with_dependencies(vec![
            Dependency::target(TargetDependency::package("Nuke")),
            Dependency::module("Core"),
            Dependency::target(TargetDependency::target("Legacy")),
        ]),
    );
    let graph = graph(vec![module, static_module("Core", &[])]);

    assert_eq!(
        graph.resolve(&name("App")).unwrap(),
        vec![
            target("Core"),
            target("CoreResources"),
            TargetDependency::package("Nuke"),
            target("Legacy"),
            target("AppResources"),
        ]
    );
}

#[test]
fn test_transitive_target_dependencies_are_inherited() {
    let core = Module::new(
        "Core",
        ModuleConfig::default()
            .with_resources(false)
            .with_dependencies(vec![Dependency::target(TargetDependency::package(
                "Alamofire",
            ))]),
    );
    let graph = graph(vec![core, plain_module("Feature", &["Core"])]);

    assert_eq!(
        graph.resolve(&name("Feature")).unwrap(),
        vec![target("Core"), TargetDependency::package("Alamofire")]
    );
}

#[test]
fn test_resolution_is_deterministic() {
    let build = || {
        graph(vec![
            plain_module("App", &["Left", "Right"]),
            static_module("Left", &["Shared"]),
            static_module("Right", &["Shared"]),
            static_module("Shared", &[]),
        ])
    };

    let first = build().resolve(&name("App")).unwrap();
    for _ in 0..10 {
        assert_eq!(build().resolve(&name("App")).unwrap(), first);
    }
}

#[test]
fn test_resolve_unknown_module() {
    let graph = graph(vec![plain_module("Core", &[])]);
    assert!(matches!(
        graph.resolve(&name("Nope")),
        Err(ModuleGraphError::ModuleNotFound { .. })
    ));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_duplicate_module_rejected() {
    let result = ModuleGraph::new(vec![plain_module("Core", &[]), static_module("Core", &[])]);
    match result {
        Err(ModuleGraphError::DuplicateModule { name }) => assert_eq!(name.as_str(), "Core"),
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[test]
fn test_missing_module_rejected() {
    let result = ModuleGraph::new(vec![plain_module("App", &["Ghost"])]);
    match result {
        Err(ModuleGraphError::MissingModule { name, required_by }) => {
            assert_eq!(name.as_str(), "Ghost");
            assert_eq!(required_by.as_str(), "App");
        }
        other => panic!("expected missing module error, got {other:?}"),
    }
}

#[test]
fn test_generated_name_collision_rejected() {
    let result = ModuleGraph::new(vec![static_module("Core", &[]), plain_module("CoreTests", &[])]);
    assert!(matches!(
        result,
        Err(ModuleGraphError::NameCollision { ref name, .. }) if name == "CoreTests"
    ));
}

#[test]
fn test_name_not_generated_does_not_collide() {
    let core = Module::new("Core", ModuleConfig::default().with_tests(None));
    assert!(ModuleGraph::new(vec![core, plain_module("CoreTests", &[])]).is_ok());
}

#[test]
fn test_empty_module_name_rejected() {
    for blank in ["", "  "] {
        let result = ModuleGraph::new(vec![plain_module(blank, &[])]);
        assert!(
            matches!(result, Err(ModuleGraphError::EmptyModuleName)),
            "{blank:?} accepted"
        );
    }
}

#[test]
fn test_extra_target_reusing_generated_name_rejected() {
    let graph = graph(vec![static_module("Core", &[])]);

    for taken in ["Core", "CoreResources", "CoreTests"] {
        match graph.check_extra_targets([taken]) {
            Err(ModuleGraphError::TargetCollision { name, owner }) => {
                assert_eq!(name, taken);
                assert!(owner.contains("module Core"), "{owner}");
            }
            other => panic!("expected collision for {taken}, got {other:?}"),
        }
    }
}

#[test]
fn test_extra_targets_must_be_unique() {
    let graph = graph(vec![plain_module("Core", &[])]);
    assert!(graph.check_extra_targets(["App", "Widget"]).is_ok());
    // Core has no bundle here, so the name is free
    assert!(graph.check_extra_targets(["CoreResources"]).is_ok());
    assert!(matches!(
        graph.check_extra_targets(["App", "App"]),
        Err(ModuleGraphError::TargetCollision { ref name, .. }) if name == "App"
    ));
}

#[test]
fn test_cycle_rejected_with_path() {
    let result = ModuleGraph::new(vec![
        plain_module("A", &["B"]),
        plain_module("B", &["C"]),
        plain_module("C", &["A"]),
    ]);

    match result {
        Err(ModuleGraphError::CircularDependency { cycle }) => {
            let nodes: Vec<&str> = cycle.split(" → ").collect();
            assert_eq!(nodes.len(), 4, "cycle: {cycle}");
            assert_eq!(nodes.first(), nodes.last());
            for module in ["A", "B", "C"] {
                assert!(nodes.contains(&module), "cycle: {cycle}");
            }
        }
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn test_self_dependency_rejected() {
    let result = ModuleGraph::new(vec![plain_module("A", &["A"])]);
    match result {
        Err(ModuleGraphError::CircularDependency { cycle }) => assert_eq!(cycle, "A → A"),
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn test_edges_out_of_wrappers_do_not_form_cycles() {
    let mut firebase = wrapper("Firebase", &["FirebaseAnalytics"]);
    firebase.config.dependencies = vec![Dependency::module("App")];

    assert!(ModuleGraph::new(vec![firebase, plain_module("App", &["Firebase"])]).is_ok());
}

#[test]
fn test_modules_iterate_in_name_order() {
    let graph = graph(vec![
        plain_module("Feature", &["Core"]),
        plain_module("Analytics", &[]),
        plain_module("Core", &[]),
    ]);

    let names: Vec<_> = graph.modules().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Analytics", "Core", "Feature"]);
    assert_eq!(graph.len(), 3);
}

#[test]
fn test_dependents() {
    let graph = graph(vec![
        plain_module("A", &["Core"]),
        plain_module("B", &["Core"]),
        plain_module("Core", &[]),
    ]);

    let dependents: Vec<_> = graph
        .dependents(&name("Core"))
        .into_iter()
        .map(ModuleName::as_str)
        .collect();
    assert_eq!(dependents, ["A", "B"]);
    assert!(graph.dependents(&name("A")).is_empty());
}
