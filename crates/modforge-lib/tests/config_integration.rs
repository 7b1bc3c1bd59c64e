use modforge_lib::application::config::AppConfig;
use modforge_lib::application::env::EnvironmentConfig;
use modforge_lib::primitives::{ColorChoice, ConfigError, LogFormat};
use std::path::PathBuf;

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert_eq!(config.manifest, PathBuf::from("modforge.yml"));
    assert_eq!(config.color, ColorChoice::Auto);
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        log_format: LogFormat::Json,
        color: ColorChoice::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.log_format, LogFormat::Json);
    assert_eq!(merged.color, ColorChoice::Never);
    assert_eq!(merged.manifest, PathBuf::from("modforge.yml"));
}

#[test]
fn test_resolve_with_environment_overrides() {
    let workdir = tempfile::tempdir().unwrap();
    let env_config = EnvironmentConfig {
        no_color: None,
        force_color: Some("1".to_string()),
        clicolor: None,
        ci: None,
    };
    let cli = AppConfig {
        workdir: Some(workdir.path().to_path_buf()),
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(env_config, cli).unwrap();
    assert_eq!(config.color, ColorChoice::Always);
    assert_eq!(config.manifest_path(), workdir.path().join("modforge.yml"));
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidWorkDir {
        path: "/nope".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid working directory: /nope");

    let err: ConfigError = "purple".parse::<ColorChoice>().unwrap_err();
    assert!(err.to_string().contains("purple"));
}
