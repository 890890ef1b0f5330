//! Theme merging.
//!
//! Fetched records and local overrides both merge shallowly over an existing
//! [`Theme`]: present keys replace, absent keys keep their value.

use super::types::{Theme, ThemeKey, ThemeOverrides};
use tracing::debug;

/// Merge a backend theme record over `theme`, returning the keys it changed.
///
/// Unknown keys and non-string values are skipped, so the theme stays fully
/// populated no matter what the backend sends.
pub fn merge_record(
    theme: &mut Theme,
    record: &serde_json::Map<String, serde_json::Value>,
) -> Vec<ThemeKey> {
    let mut changed = Vec::new();

    for (name, value) in record {
        let Some(key) = ThemeKey::from_name(name) else {
            debug!(key = %name, "ignoring unknown theme key");
            continue;
        };
        let Some(value) = value.as_str() else {
            debug!(key = %name, "ignoring non-string theme value");
            continue;
        };
        if theme.get(key) != value {
            theme.set(key, value);
            changed.push(key);
        }
    }

    changed
}

/// Apply local config overrides, merging only the fields that are present.
pub fn apply_overrides(theme: &mut Theme, overrides: &ThemeOverrides) {
    for key in ThemeKey::ALL {
        if let Some(value) = overrides.get(key) {
            theme.set(key, value);
        }
    }
}
