mod common;

use std::io::Write;

use hrdesk::config::{Config, ConfigError};
use tempfile::NamedTempFile;

#[test]
fn load_from_parses_toml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"base_url = "http://localhost:8080/api""#).unwrap();
    writeln!(file, "connect_timeout_seconds = 10").unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.base_url, "http://localhost:8080/api");
    assert_eq!(config.connect_timeout_seconds, 10);
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"base_url = "http://localhost:8080""#).unwrap();

    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(
        config.connect_timeout_seconds,
        Config::default().connect_timeout_seconds
    );
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "base_url = [not toml").unwrap();

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn empty_base_url_fails_validation() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"base_url = """#).unwrap();

    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn non_http_base_url_fails_validation() {
    let config = Config {
        base_url: "ftp://example.com".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn missing_file_is_a_read_error() {
    let err = Config::load_from(std::path::Path::new("/nonexistent/hrdesk.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
