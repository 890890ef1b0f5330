//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError`.

#[cfg(test)]
mod tests;

use crate::schema::WidgetConfig;
use chatwidget_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WidgetConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_base_url(&mut errors, &config.backend.base_url);
    validate_label(&mut errors, "labels.button", &config.labels.button);
    validate_label(&mut errors, "labels.send", &config.labels.send);
    validate_label(&mut errors, "labels.typing", &config.labels.typing);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_base_url(errors: &mut Vec<String>, url: &str) {
    let url = url.trim();
    if url.is_empty() {
        errors.push("backend.base_url is empty".into());
    } else if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "backend.base_url = {url} must start with http:// or https://"
        ));
    }
}

fn validate_label(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} is empty"));
    }
}
