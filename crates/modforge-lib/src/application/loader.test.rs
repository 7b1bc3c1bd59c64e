use super::*;
use crate::primitives::ColorChoice;
use std::path::PathBuf;
use tempfile::TempDir;

fn env_config(no_color: Option<&str>) -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: no_color.map(String::from),
        force_color: None,
        clicolor: None,
        ci: None,
    }
}

#[test]
fn test_resolve_applies_environment_color() {
    let dir = TempDir::new().unwrap();
    let cli = AppConfig {
        workdir: Some(dir.path().to_path_buf()),
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(env_config(Some("1")), cli).unwrap();
    assert_eq!(config.color, ColorChoice::Never);
}

#[test]
fn test_resolve_cli_overrides_environment() {
    let dir = TempDir::new().unwrap();
    let cli = AppConfig {
        workdir: Some(dir.path().to_path_buf()),
        color: ColorChoice::Always,
        manifest: PathBuf::from("shop.toml"),
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(env_config(Some("1")), cli).unwrap();
    assert_eq!(config.color, ColorChoice::Always);
    assert_eq!(config.manifest_path(), dir.path().join("shop.toml"));
}

#[test]
fn test_resolve_fills_workdir() {
    let config = AppConfig::resolve(env_config(None), AppConfig::default()).unwrap();
    assert!(config.workdir.is_some());
}

#[test]
fn test_resolve_rejects_bad_workdir() {
    let cli = AppConfig {
        workdir: Some(PathBuf::from("/definitely/not/a/real/dir")),
        ..AppConfig::default()
    };
    assert!(AppConfig::resolve(env_config(None), cli).is_err());
}

#[test]
fn test_global_config_initializes_once() {
    let stored = AppConfig::init_global(AppConfig::default()).unwrap();
    assert_eq!(AppConfig::global(), Some(stored));
    assert!(matches!(
        AppConfig::init_global(AppConfig::default()),
        Err(ConfigError::AlreadyInitialized)
    ));
}
