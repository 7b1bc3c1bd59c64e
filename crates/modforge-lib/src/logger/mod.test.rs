use super::*;

#[test]
fn test_default_filter_scopes_crates_to_level() {
    let filter = default_filter(LogLevel::Debug);
    assert!(filter.contains("modforge=debug"));
    assert!(filter.contains("modforge_lib=debug"));
    assert!(filter.ends_with(",warn"));
}

#[test]
fn test_default_filter_is_valid_directive() {
    for verbosity in 0..=4 {
        let filter = default_filter(LogLevel::from_verbosity(verbosity));
        assert!(EnvFilter::try_new(&filter).is_ok(), "bad filter: {filter}");
    }
}

#[test]
fn test_global_logger_consistency() {
    // Other tests in the binary may or may not have initialized it
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}
