mod common;

use calcterm::config::{Config, ConfigError};
use common::temp_config;
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.display.group_separator, ',');
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.ui.show_keypad);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert_eq!(config.tick_rate(), Duration::from_millis(250));
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("calcterm/config.toml"));
    assert!(Config::default_log_path().ends_with("calcterm/calcterm.log"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[display]
group_separator = " "

[logging]
file = "/tmp/calc.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.group_separator, ' ');
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.log_path(), std::path::PathBuf::from("/tmp/calc.log"));
    assert_eq!(
        config.formatter().format(Some("1234567")).as_deref(),
        Some("1 234 567")
    );
}

#[test]
fn test_full_file_parses() {
    let (_dir, path) = temp_config(
        r#"
[display]
group_separator = "'"

[ui]
tick_rate_ms = 100
show_keypad = false

[logging]
level = "debug"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.display.group_separator, '\'');
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(!config.ui.show_keypad);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[ui\ntick_rate_ms = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: err_path, .. }) => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_digit_separator_rejected() {
    let (_dir, path) = temp_config("[display]\ngroup_separator = \"5\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("group_separator"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_zero_tick_rate_rejected() {
    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_unknown_log_level_rejected() {
    let mut config = Config::default();
    config.logging.level = "chatty".to_string();
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("chatty")),
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}
