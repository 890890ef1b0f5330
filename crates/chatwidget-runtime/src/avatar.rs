//! Bot avatar resolution.
//!
//! Unresolved -> Custom | Default, exactly once per widget instance. Until
//! the probe settles every render uses the default URL, and nothing rendered
//! earlier is revisited afterwards.

/// Where the bot avatar currently points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarReference {
    Unresolved,
    /// The backend has a custom image for this bot at this URL.
    Custom(String),
    Default,
}

#[derive(Debug, Clone)]
pub struct AvatarResolver {
    reference: AvatarReference,
    default_url: String,
    probe_started: bool,
}

impl AvatarResolver {
    pub fn new(default_url: impl Into<String>) -> Self {
        Self {
            reference: AvatarReference::Unresolved,
            default_url: default_url.into(),
            probe_started: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn reference(&self) -> &AvatarReference {
        &self.reference
    }

    pub fn is_resolved(&self) -> bool {
        self.reference != AvatarReference::Unresolved
    }

    /// URL to render right now: the custom one if resolved, else the default.
    pub fn current_url(&self) -> &str {
        match &self.reference {
            AvatarReference::Custom(url) => url,
            AvatarReference::Unresolved | AvatarReference::Default => &self.default_url,
        }
    }

    /// Claim the single probe slot.
    pub fn begin_probe(&mut self) -> bool {
        if self.probe_started {
            return false;
        }
        self.probe_started = true;
        true
    }

    pub fn resolve_custom(&mut self, url: impl Into<String>) {
        if !self.is_resolved() {
            self.reference = AvatarReference::Custom(url.into());
        }
    }

    pub fn resolve_default(&mut self) {
        if !self.is_resolved() {
            self.reference = AvatarReference::Default;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "http://127.0.0.1:5000/static/bot.png";
    const CUSTOM: &str = "http://127.0.0.1:5000/bot/support/avatar?_=42";

    #[test]
    fn unresolved_renders_default() {
        let resolver = AvatarResolver::new(DEFAULT);
        assert!(!resolver.is_resolved());
        assert_eq!(resolver.current_url(), DEFAULT);
    }

    #[test]
    fn custom_resolution() {
        let mut resolver = AvatarResolver::new(DEFAULT);
        resolver.resolve_custom(CUSTOM);
        assert_eq!(resolver.reference(), &AvatarReference::Custom(CUSTOM.into()));
        assert_eq!(resolver.current_url(), CUSTOM);
    }

    #[test]
    fn default_resolution() {
        let mut resolver = AvatarResolver::new(DEFAULT);
        resolver.resolve_default();
        assert_eq!(resolver.reference(), &AvatarReference::Default);
        assert_eq!(resolver.current_url(), DEFAULT);
    }

    #[test]
    fn resolves_only_once() {
        let mut resolver = AvatarResolver::new(DEFAULT);
        resolver.resolve_default();
        resolver.resolve_custom(CUSTOM);
        assert_eq!(resolver.current_url(), DEFAULT);
    }

    #[test]
    fn single_probe() {
        let mut resolver = AvatarResolver::new(DEFAULT);
        assert!(resolver.begin_probe());
        assert!(!resolver.begin_probe());
    }
}
