use super::*;

#[test]
fn test_module_edge_names_main_target() {
    let core = ModuleName::new("Core");
    assert_eq!(TargetDependency::module(&core), TargetDependency::target("Core"));
    assert_eq!(
        TargetDependency::resources_of(&core),
        TargetDependency::target("CoreResources")
    );
}

#[test]
fn test_dedup_keeps_first_occurrence() {
    let deps = vec![
        TargetDependency::target("A"),
        TargetDependency::package("Alamofire"),
        TargetDependency::target("B"),
        TargetDependency::target("A"),
        TargetDependency::package("Alamofire"),
    ];

    assert_eq!(
        dedup_preserving_order(deps),
        vec![
            TargetDependency::target("A"),
            TargetDependency::package("Alamofire"),
            TargetDependency::target("B"),
        ]
    );
}

#[test]
fn test_dedup_distinguishes_kinds_with_same_label() {
    let deps = vec![
        TargetDependency::target("Lottie"),
        TargetDependency::package("Lottie"),
    ];
    assert_eq!(dedup_preserving_order(deps.clone()), deps);
}

#[test]
fn test_dedup_empty() {
    assert!(dedup_preserving_order(Vec::new()).is_empty());
}

#[test]
fn test_sdk_status_defaults_to_required() {
    let dep: TargetDependency = serde_json::from_str(r#"{"sdk": {"name": "libz.tbd"}}"#).unwrap();
    assert_eq!(
        dep,
        TargetDependency::Sdk {
            name: "libz.tbd".to_string(),
            status: SdkStatus::Required,
        }
    );
}

#[test]
fn test_declared_dependency_shapes() {
    let deps: Vec<Dependency> = serde_json::from_str(
        r#"[
            {"module": "Core"},
            {"target": {"package": {"product": "Alamofire"}}},
            {"target": {"project": {"target": "Legacy", "path": "../Legacy"}}}
        ]"#,
    )
    .unwrap();

    assert_eq!(deps[0].as_module(), Some(&ModuleName::new("Core")));
    assert_eq!(
        deps[1].as_target(),
        Some(&TargetDependency::package("Alamofire"))
    );
    assert!(deps[2].as_module().is_none());
}

#[test]
fn test_display_is_kind_qualified() {
    assert_eq!(TargetDependency::target("Core").to_string(), "target:Core");
    assert_eq!(TargetDependency::package("Nuke").to_string(), "package:Nuke");
}
