use super::*;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.manifest, PathBuf::from("modforge.yml"));
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorChoice::Auto);
    assert!(config.workdir.is_none());
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig {
        log_level: 2,
        ..AppConfig::default()
    };
    let overrides = AppConfig {
        manifest: PathBuf::from("project.toml"),
        color: ColorChoice::Never,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };

    let merged = base.merge_with(overrides);
    assert_eq!(merged.manifest, PathBuf::from("project.toml"));
    assert_eq!(merged.color, ColorChoice::Never);
    assert_eq!(merged.log_format, LogFormat::Json);
    // default in `other` does not clobber base
    assert_eq!(merged.log_level, 2);
}

#[test]
fn test_to_logger_config() {
    let config = AppConfig {
        log_level: 3,
        log_output: LogOutput::Stdout,
        color: ColorChoice::Always,
        ..AppConfig::default()
    };
    let logger = config.to_logger_config();
    assert_eq!(logger.level, LogLevel::Debug);
    assert_eq!(logger.output, LogOutput::Stdout);
    assert!(logger.ansi);

    let plain = AppConfig {
        color: ColorChoice::Never,
        ..AppConfig::default()
    };
    assert!(!plain.to_logger_config().ansi);
}

#[test]
fn test_validate_keeps_explicit_workdir() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig {
        workdir: Some(dir.path().to_path_buf()),
        ..AppConfig::default()
    };
    config.validate().unwrap();
    assert_eq!(config.workdir.as_deref(), Some(dir.path()));
}

#[test]
fn test_validate_rejects_missing_workdir() {
    let dir = TempDir::new().unwrap();
    let mut config = AppConfig {
        workdir: Some(dir.path().join("absent")),
        ..AppConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWorkDir { .. })
    ));
}

#[test]
fn test_manifest_path_resolution() {
    let config = AppConfig {
        workdir: Some(PathBuf::from("/work")),
        ..AppConfig::default()
    };
    assert_eq!(config.manifest_path(), PathBuf::from("/work/modforge.yml"));
    assert_eq!(
        config.resolve_path(Path::new("out/project.json")),
        PathBuf::from("/work/out/project.json")
    );
    assert_eq!(
        config.resolve_path(Path::new("/abs/project.json")),
        PathBuf::from("/abs/project.json")
    );

    let absolute = AppConfig {
        workdir: Some(PathBuf::from("/work")),
        manifest: PathBuf::from("/elsewhere/m.toml"),
        ..AppConfig::default()
    };
    assert_eq!(absolute.manifest_path(), PathBuf::from("/elsewhere/m.toml"));
}

#[test]
fn test_parses_from_flags() {
    let config = AppConfig::try_parse_from([
        "modforge",
        "--manifest",
        "shop.toml",
        "--log-level",
        "4",
        "--color",
        "off",
    ])
    .unwrap();
    assert_eq!(config.manifest, PathBuf::from("shop.toml"));
    assert_eq!(config.log_level, 4);
    assert_eq!(config.color, ColorChoice::Never);
}
