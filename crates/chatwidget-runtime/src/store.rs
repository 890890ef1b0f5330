//! Theme store: the widget's current theme and its one-shot fetch state.

use chatwidget_client::ThemeRecord;
use chatwidget_config::theme::merge_record;
use chatwidget_config::{Theme, ThemeKey};

/// Holds the current [`Theme`] for one widget instance.
///
/// The theme starts fully populated and only ever gets keys overridden, so
/// readers never see a missing value.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    theme: Theme,
    loaded: bool,
    fetch_started: bool,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: initial,
            loaded: false,
            fetch_started: false,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether the remote fetch has settled, successfully or not.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Claim the single fetch slot. Returns `false` if a fetch already ran or
    /// is in flight.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_started {
            return false;
        }
        self.fetch_started = true;
        true
    }

    /// Merge a fetched record over the current theme and mark it loaded.
    pub fn merge(&mut self, record: &ThemeRecord) -> Vec<ThemeKey> {
        self.loaded = true;
        merge_record(&mut self.theme, record)
    }

    /// Settle a failed fetch: the theme keeps its values.
    pub fn mark_failed(&mut self) {
        self.loaded = true;
    }
}
