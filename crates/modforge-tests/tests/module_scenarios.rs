//! End-to-end generation of the reference module layouts
//!
//! Each test writes a manifest into a temp working directory, runs
//! `generate -o` through the live session and inspects the descriptor.

use anyhow::Result;
use modforge_tests::TestEnvironment;
use modforge_tests::fixtures::*;

/// Single static module: three targets, bundle edge on the main target
#[test]
fn test_single_static_module() -> Result<()> {
    let env = TestEnvironment::with_manifest("modforge.yml", SINGLE_CORE_YAML)?;
    let descriptor = parse_descriptor(&env.generate_to("project.json")?)?;

    assert_eq!(
        target_names(&descriptor),
        ["Core", "CoreResources", "CoreTests"]
    );

    let core = target(&descriptor, "Core").unwrap();
    assert_eq!(core["product"], "static_framework");
    assert_eq!(core["bundle_id"], "com.example.Core");
    assert_eq!(core["sources"][0], "Modules/Core/Sources/**");
    assert_eq!(dependency_names(core), ["target:CoreResources"]);

    let bundle = target(&descriptor, "CoreResources").unwrap();
    assert_eq!(bundle["product"], "bundle");
    assert_eq!(bundle["scripts"][0]["name"], "Remove Embedded Executable");

    let tests = target(&descriptor, "CoreTests").unwrap();
    assert_eq!(tests["product"], "unit_tests");
    assert_eq!(
        dependency_names(tests),
        ["target:Core", "target:CoreResources"]
    );

    assert_eq!(scheme_names(&descriptor), ["Core", "CoreResources"]);
    Ok(())
}

/// Wrapper modules end the walk: their packages never leak upward
#[test]
fn test_feature_with_wrapper() -> Result<()> {
    let env = TestEnvironment::with_manifest("modforge.yml", FEATURE_WITH_WRAPPER_YAML)?;
    let descriptor = parse_descriptor(&env.generate_to("project.json")?)?;

    let feature = target(&descriptor, "Feature").unwrap();
    assert_eq!(
        dependency_names(feature),
        [
            "target:Core",
            "target:ThirdPartyWrapper",
            "target:CoreResources"
        ]
    );

    let wrapper = target(&descriptor, "ThirdPartyWrapper").unwrap();
    assert_eq!(wrapper["product"], "framework");
    assert_eq!(dependency_names(wrapper), ["package:P", "package:Q"]);
    assert!(target(&descriptor, "ThirdPartyWrapperResources").is_none());
    assert!(target(&descriptor, "ThirdPartyWrapperTests").is_none());
    assert!(target(&descriptor, "FeatureResources").is_none());

    assert_eq!(descriptor["packages"].as_array().unwrap().len(), 1);
    Ok(())
}

/// A shared dependency yields one set of targets referenced by every dependent
#[test]
fn test_shared_core_is_not_duplicated() -> Result<()> {
    let env = TestEnvironment::with_manifest("modforge.yml", SHARED_CORE_YAML)?;
    let descriptor = parse_descriptor(&env.generate_to("project.json")?)?;

    let names = target_names(&descriptor);
    assert_eq!(
        names,
        [
            "A",
            "AResources",
            "B",
            "BResources",
            "Core",
            "CoreResources",
            "CoreTests",
            "SharedApp"
        ]
    );
    assert_eq!(names.iter().filter(|n| *n == "Core").count(), 1);
    assert_eq!(names.iter().filter(|n| *n == "CoreResources").count(), 1);

    for dependent in ["A", "B"] {
        let deps = dependency_names(target(&descriptor, dependent).unwrap());
        assert!(deps.contains(&"target:Core".to_string()), "{dependent}: {deps:?}");
        assert!(
            deps.contains(&"target:CoreResources".to_string()),
            "{dependent}: {deps:?}"
        );
    }

    let core = target(&descriptor, "Core").unwrap();
    assert_eq!(core["bundle_id"], "org.shared.ios.Core");

    let core_tests = target(&descriptor, "CoreTests").unwrap();
    assert!(core_tests.get("resources").is_none());

    let schemes = scheme_names(&descriptor);
    assert_eq!(schemes.first().map(String::as_str), Some("SharedApp"));
    assert_eq!(
        schemes,
        [
            "SharedApp",
            "A",
            "AResources",
            "B",
            "BResources",
            "Core",
            "CoreResources"
        ]
    );
    Ok(())
}

#[test]
fn test_cycle_is_rejected() -> Result<()> {
    let env = TestEnvironment::with_manifest("modforge.yml", CYCLE_YAML)?;
    let err = env.generate_to("project.json").unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Circular dependency"), "{message}");
    for module in ["A", "B", "C"] {
        assert!(message.contains(module), "{message}");
    }
    assert!(!env.work_path.join("project.json").exists());
    Ok(())
}

#[test]
fn test_missing_module_is_rejected() -> Result<()> {
    let env = TestEnvironment::with_manifest("modforge.yml", MISSING_MODULE_YAML)?;
    let err = env.generate_to("project.json").unwrap_err();
    assert!(err.to_string().contains("Missing module: Core"), "{err}");
    Ok(())
}
