use assert_cmd::Command;
use modforge_tests::fixtures::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn modforge(workdir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("modforge").unwrap();
    cmd.current_dir(workdir.path())
        .env("NO_COLOR", "1")
        .env_remove("MODFORGE_MANIFEST")
        .env_remove("MODFORGE_WORKDIR")
        .env_remove("RUST_LOG");
    cmd
}

fn project_with(manifest: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("modforge.yml"), manifest).unwrap();
    dir
}

#[test]
fn test_no_command_prints_usage_hint() {
    let dir = TempDir::new().unwrap();
    modforge(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("modforge --help"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    modforge(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("modforge "));
}

#[test]
fn test_generate_to_stdout() {
    let dir = project_with(SINGLE_CORE_YAML);
    let output = modforge(&dir).arg("generate").output().unwrap();
    assert!(output.status.success());

    let descriptor = parse_descriptor(&String::from_utf8(output.stdout).unwrap()).unwrap();
    assert_eq!(
        target_names(&descriptor),
        ["Core", "CoreResources", "CoreTests"]
    );
}

#[test]
fn test_generate_then_check() {
    let dir = project_with(SHARED_CORE_YAML);
    modforge(&dir)
        .args(["generate", "-o", "Generated/project.json"])
        .assert()
        .success();
    assert!(dir.path().join("Generated/project.json").exists());

    modforge(&dir)
        .args(["check", "--output", "Generated/project.json"])
        .assert()
        .success();

    fs::write(dir.path().join("Generated/project.json"), "{}\n").unwrap();
    modforge(&dir)
        .args(["check", "--output", "Generated/project.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));
}

#[test]
fn test_resolve_prints_edges() {
    let dir = project_with(FEATURE_WITH_WRAPPER_YAML);
    modforge(&dir)
        .args(["resolve", "Feature"])
        .assert()
        .success()
        .stdout("target:Core\ntarget:ThirdPartyWrapper\ntarget:CoreResources\n");
}

#[test]
fn test_resolve_unknown_module_fails() {
    let dir = project_with(FEATURE_WITH_WRAPPER_YAML);
    modforge(&dir)
        .args(["resolve", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Module not found: Nope"));
}

#[test]
fn test_describe_prints_json() {
    let dir = project_with(FEATURE_WITH_WRAPPER_YAML);
    let output = modforge(&dir)
        .args(["describe", "ThirdPartyWrapper"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let description: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(description["module"], "ThirdPartyWrapper");
    assert_eq!(description["targets"].as_array().unwrap().len(), 1);
}

#[test]
fn test_validate_reports_cycle() {
    let dir = project_with(CYCLE_YAML);
    modforge(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circular dependency"));
}

#[test]
fn test_manifest_flag_and_workdir() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("shop");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("shop.toml"), FEATURE_WITH_WRAPPER_TOML).unwrap();

    modforge(&dir)
        .args(["--workdir", "shop", "--manifest", "shop.toml", "validate"])
        .assert()
        .success();
}

#[test]
fn test_manifest_from_environment() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("custom.yml"), SINGLE_CORE_YAML).unwrap();

    modforge(&dir)
        .env("MODFORGE_MANIFEST", "custom.yml")
        .arg("validate")
        .assert()
        .success();
}
