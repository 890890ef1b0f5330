//! Chat widget configuration.
//!
//! Provides the built-in theme and its merge rules, bot identity resolution
//! from the embedding script, and the TOML file that fixes the backend base
//! URL and widget labels at startup. Every section uses serde defaults so a
//! missing or partial file works out of the box.

pub mod embed;
pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod validation;

pub use embed::resolve_bot_identity;
pub use schema::{BackendConfig, LabelsConfig, WidgetConfig, DEFAULT_BASE_URL};
pub use theme::{Theme, ThemeKey, ThemeOverrides};

use std::path::Path;

use chatwidget_common::ConfigError;

/// Load the widget config from `path`, or from the platform default path
/// when none is given.
///
/// Only a missing explicit file or unparseable TOML is an error. Validation
/// problems are logged and the parsed config is kept, so one bad label does
/// not discard the backend URL or theme overrides. Without an explicit path
/// a missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<WidgetConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn explicit_path_is_used() {
        let file = write_config("[backend]\nbase_url = \"https://bots.example.com\"\n");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.backend.base_url, "https://bots.example.com");
    }

    #[test]
    fn invalid_label_keeps_rest_of_file() {
        let file = write_config(
            "[backend]\nbase_url = \"https://bots.example.com\"\n\n\
             [labels]\nbutton = \"\"\n\n\
             [theme]\nbutton_color = \"#00ff00\"\n",
        );
        let config = load_config(Some(file.path())).unwrap();

        assert!(validation::validate(&config).is_err());
        assert_eq!(config.backend.base_url, "https://bots.example.com");
        assert_eq!(config.labels.button, "");
        assert_eq!(config.theme.button_color.as_deref(), Some("#00ff00"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
