//! Configuration schema types for the chat widget.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod backend;
mod labels;

pub use backend::*;
pub use labels::*;

use serde::{Deserialize, Serialize};

use crate::theme::{apply_overrides, Theme, ThemeOverrides};

/// Root configuration for one embedded widget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub backend: BackendConfig,
    pub labels: LabelsConfig,
    /// Local overrides of the built-in theme, applied before any backend fetch.
    pub theme: ThemeOverrides,
}

impl WidgetConfig {
    /// The theme a widget starts with: built-in defaults plus local overrides.
    pub fn initial_theme(&self) -> Theme {
        let mut theme = Theme::default();
        apply_overrides(&mut theme, &self.theme);
        theme
    }
}
