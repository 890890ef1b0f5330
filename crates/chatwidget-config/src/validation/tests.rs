//! Tests for config validation.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&WidgetConfig::default()).is_ok());
}

#[test]
fn catches_empty_base_url() {
    let mut config = WidgetConfig::default();
    config.backend.base_url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.base_url is empty"));
}

#[test]
fn catches_base_url_without_http_scheme() {
    let mut config = WidgetConfig::default();
    config.backend.base_url = "ws://127.0.0.1:5000".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.base_url"));
}

#[test]
fn accepts_https_base_url() {
    let mut config = WidgetConfig::default();
    config.backend.base_url = "https://bots.example.com".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = WidgetConfig::default();
    config.backend.base_url = String::new();
    config.labels.send = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("backend.base_url"));
    assert!(err.contains("labels.send"));
}
