use super::*;
use std::env;
use std::sync::Mutex;

// Process environment is shared between test threads
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn vars(no_color: Option<&str>, force_color: Option<&str>, clicolor: Option<&str>, ci: Option<&str>) -> EnvironmentConfig {
    EnvironmentConfig {
        no_color: no_color.map(String::from),
        force_color: force_color.map(String::from),
        clicolor: clicolor.map(String::from),
        ci: ci.map(String::from),
    }
}

fn clean_color_env() {
    unsafe {
        for key in ["NO_COLOR", "FORCE_COLOR", "CLICOLOR", "CI"] {
            env::remove_var(key);
        }
    }
}

#[test]
fn test_nothing_set_keeps_choice() {
    let env_config = vars(None, None, None, None);
    assert_eq!(env_config.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
    assert_eq!(env_config.apply_color_config(ColorChoice::Always), ColorChoice::Always);
}

#[test]
fn test_no_color_disables() {
    let env_config = vars(Some("1"), None, None, None);
    assert_eq!(env_config.apply_color_config(ColorChoice::Auto), ColorChoice::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env_config = vars(Some(""), None, None, None);
    assert_eq!(env_config.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
}

#[test]
fn test_clicolor_zero_disables() {
    assert_eq!(
        vars(None, None, Some("0"), None).apply_color_config(ColorChoice::Auto),
        ColorChoice::Never
    );
    assert_eq!(
        vars(None, None, Some("1"), None).apply_color_config(ColorChoice::Auto),
        ColorChoice::Auto
    );
}

#[test]
fn test_force_color_wins_over_no_color() {
    let env_config = vars(Some("1"), Some("1"), Some("0"), None);
    assert_eq!(env_config.apply_color_config(ColorChoice::Auto), ColorChoice::Always);

    let forced_off = vars(None, Some("false"), None, None);
    assert_eq!(forced_off.apply_color_config(ColorChoice::Always), ColorChoice::Never);

    let garbage = vars(None, Some("maybe"), None, None);
    assert_eq!(garbage.apply_color_config(ColorChoice::Auto), ColorChoice::Auto);
}

#[test]
fn test_ci_always_disables() {
    let env_config = vars(None, Some("1"), None, Some("true"));
    assert_eq!(env_config.apply_color_config(ColorChoice::Always), ColorChoice::Never);
}

#[test]
fn test_load_reads_process_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    clean_color_env();
    unsafe {
        env::set_var("NO_COLOR", "1");
        env::set_var("CLICOLOR", "0");
    }

    let env_config = EnvironmentConfig::load().unwrap();
    assert_eq!(env_config.no_color.as_deref(), Some("1"));
    assert_eq!(env_config.clicolor.as_deref(), Some("0"));
    assert!(env_config.force_color.is_none());

    clean_color_env();
}
