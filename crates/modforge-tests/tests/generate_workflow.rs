//! Integration tests for the generate/check workflow
//!
//! - Byte-stable output across runs
//! - `check` accepting fresh and rejecting stale descriptors
//! - YAML and TOML manifests describing the same project

use anyhow::Result;
use modforge_lib::application::cli::Commands;
use modforge_tests::TestEnvironment;
use modforge_tests::fixtures::*;
use std::path::PathBuf;

#[test]
fn test_generation_is_deterministic() -> Result<()> {
    let env = TestEnvironment::with_manifest("modforge.yml", SHARED_CORE_YAML)?;

    let first = env.generate_to("first.json")?;
    let second = env.generate_to("second.json")?;
    assert_eq!(first, second);
    assert!(first.ends_with('\n'));
    Ok(())
}

#[test]
fn test_module_declaration_order_does_not_matter() -> Result<()> {
    let reordered = r#"
project:
  name: Shop
  packages:
    - remote:
        url: https://example.com/p.git
        version: "1.0.0"
modules:
  - name: ThirdPartyWrapper
    product:
      wrapper:
        - package:
            product: P
        - package:
            product: Q
  - name: Core
  - name: Feature
    has_resources: false
    dependencies:
      - module: Core
      - module: ThirdPartyWrapper
"#;
    let original = TestEnvironment::with_manifest("modforge.yml", FEATURE_WITH_WRAPPER_YAML)?;
    let shuffled = TestEnvironment::with_manifest("modforge.yml", reordered)?;

    assert_eq!(
        original.generate_to("project.json")?,
        shuffled.generate_to("project.json")?
    );
    Ok(())
}

#[test]
fn test_yaml_and_toml_manifests_agree() -> Result<()> {
    let yaml = TestEnvironment::with_manifest("modforge.yml", FEATURE_WITH_WRAPPER_YAML)?;
    let toml = TestEnvironment::with_manifest("modforge.toml", FEATURE_WITH_WRAPPER_TOML)?;

    assert_eq!(
        yaml.generate_to("project.json")?,
        toml.generate_to("project.json")?
    );
    Ok(())
}

#[test]
fn test_check_accepts_fresh_descriptor() -> Result<()> {
    let env = TestEnvironment::with_manifest("modforge.yml", SINGLE_CORE_YAML)?;
    env.generate_to("out/project.json")?;

    env.run(Commands::Check {
        output: PathBuf::from("out/project.json"),
    })
}

#[test]
fn test_check_rejects_descriptor_after_manifest_change() -> Result<()> {
    let env = TestEnvironment::with_manifest("modforge.yml", SINGLE_CORE_YAML)?;
    env.generate_to("project.json")?;

    env.write_file(
        "modforge.yml",
        &SINGLE_CORE_YAML.replace("- name: Core", "- name: Core\n    tests: false"),
    )?;

    let err = env
        .run(Commands::Check {
            output: PathBuf::from("project.json"),
        })
        .unwrap_err();
    assert!(err.to_string().contains("out of date"), "{err}");
    Ok(())
}

#[test]
fn test_validate_reads_manifest_from_workdir() -> Result<()> {
    let env = TestEnvironment::with_manifest("shop.toml", FEATURE_WITH_WRAPPER_TOML)?;
    env.run(Commands::Validate)?;

    let missing = TestEnvironment::new()?;
    let err = missing.run(Commands::Validate).unwrap_err();
    assert!(err.to_string().contains("Failed to load manifest"), "{err}");
    Ok(())
}
