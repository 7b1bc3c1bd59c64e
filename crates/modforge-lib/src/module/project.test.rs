use super::*;
use crate::module::config::{Module, ModuleConfig, Product};
use crate::module::context::DEFAULT_BUNDLE_ID_TEMPLATE;
use crate::module::dependency::{Dependency, TargetDependency};
use crate::module::scheme::BuildAction;
use crate::module::values::{Platform, TargetProduct};

fn context() -> ProjectContext {
    ProjectContext::new(Platform::Ios, "Modules", DEFAULT_BUNDLE_ID_TEMPLATE).unwrap()
}

fn depending_on(name: &str, deps: &[&str]) -> Module {
    Module::new(
        name,
        ModuleConfig::default()
            .with_resources(false)
            .with_tests(None)
            .with_dependencies(deps.iter().map(|d| Dependency::module(*d)).collect()),
    )
}

fn shared_core_graph() -> ModuleGraph {
    ModuleGraph::new(vec![
        depending_on("B", &["Core"]),
        Module::new("Core", ModuleConfig::default().with_tests(None)),
        depending_on("A", &["Core"]),
    ])
    .unwrap()
}

#[test]
fn test_shared_dependency_generates_single_targets() {
    let project = Project::assemble(
        "App",
        &shared_core_graph(),
        ProjectExtras::default(),
        &context(),
    )
    .unwrap();

    let names: Vec<_> = project.targets.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "Core", "CoreResources"]);

    for dependent in ["A", "B"] {
        let target = project.target(dependent).unwrap();
        assert!(target.dependencies.contains(&TargetDependency::target("Core")));
        assert!(
            target
                .dependencies
                .contains(&TargetDependency::target("CoreResources"))
        );
    }
}

#[test]
fn test_extras_order_and_pass_through() {
    let extra_target = Target {
        name: "App".to_string(),
        platform: Platform::Ios,
        product: TargetProduct::App,
        bundle_id: "com.example.App".to_string(),
        info_plist: Default::default(),
        sources: vec!["App/Sources/**".to_string()],
        resources: Vec::new(),
        headers: None,
        scripts: Vec::new(),
        dependencies: vec![TargetDependency::target("A")],
        settings: Settings::default(),
        additional_files: Vec::new(),
    };
    let extra_scheme = Scheme {
        name: "App".to_string(),
        shared: true,
        hidden: false,
        build_action: Some(BuildAction {
            targets: vec!["App".to_string()],
        }),
        test_action: None,
    };
    let extras = ProjectExtras {
        targets: vec![extra_target.clone()],
        packages: vec![Package::Local {
            path: "Vendor/Kit".to_string(),
        }],
        schemes: vec![extra_scheme.clone()],
        additional_files: vec!["README.md".to_string()],
        settings: Settings::default(),
    };

    let project = Project::assemble("App", &shared_core_graph(), extras, &context()).unwrap();

    assert_eq!(project.targets.last(), Some(&extra_target));
    assert_eq!(project.schemes.first(), Some(&extra_scheme));

    let scheme_names: Vec<_> = project.schemes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(scheme_names, ["App", "A", "B", "Core", "CoreResources"]);

    assert_eq!(project.packages.len(), 1);
    assert_eq!(project.additional_files, vec!["README.md".to_string()]);
}

#[test]
fn test_json_output_is_byte_stable() {
    let build = || {
        let graph = ModuleGraph::new(vec![
            depending_on("Feature", &["Core", "Wrapper"]),
            Module::new("Core", ModuleConfig::default()),
            Module::new(
                "Wrapper",
                ModuleConfig::default().with_product(Product::Wrapper(vec![
                    TargetDependency::package("P"),
                    TargetDependency::package("Q"),
                ])),
            ),
        ])
        .unwrap();
        Project::assemble("App", &graph, ProjectExtras::default(), &context())
            .unwrap()
            .to_json()
            .unwrap()
    };

    let first = build();
    assert!(first.ends_with('\n'));
    for _ in 0..5 {
        assert_eq!(build(), first);
    }
}

#[test]
fn test_json_round_trips_through_descriptor() {
    let project = Project::assemble(
        "App",
        &shared_core_graph(),
        ProjectExtras::default(),
        &context(),
    )
    .unwrap();

    let parsed: Project = serde_json::from_str(&project.to_json().unwrap()).unwrap();
    assert_eq!(parsed, project);
}

#[test]
fn test_empty_graph_yields_only_extras() {
    let graph = ModuleGraph::new(Vec::new()).unwrap();
    let project = Project::assemble("Empty", &graph, ProjectExtras::default(), &context()).unwrap();
    assert!(project.targets.is_empty());
    assert!(project.schemes.is_empty());
}
