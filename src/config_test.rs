use super::*;

#[test]
fn defaults_mount_api_under_j() {
    let config = AppConfig::from_values(None, None);
    assert_eq!(config.api_base, "/j");
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn api_base_override_drops_trailing_slash() {
    let config = AppConfig::from_values(Some("https://api.gonawin.test/j/"), None);
    assert_eq!(config.api_base, "https://api.gonawin.test/j");
}

#[test]
fn blank_api_base_falls_back_to_default() {
    let config = AppConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = AppConfig::from_values(None, Some("debug"));
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn unknown_log_level_keeps_default() {
    let config = AppConfig::from_values(None, Some("chatty"));
    assert_eq!(config.log_level, log::Level::Info);
}
