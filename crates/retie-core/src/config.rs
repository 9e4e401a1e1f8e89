//! Controller configuration

use crate::theme::Theme;

/// Blog configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogConfig {
    /// Whether an empty store is seeded with the two fixed example posts
    pub seed_on_empty: bool,
    /// Theme applied when no persisted value exists
    pub default_theme: Theme,
}

impl BlogConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With seeding enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_seed_on_empty(mut self, seed: bool) -> Self {
        self.seed_on_empty = seed;
        self
    }

    /// With default theme
    #[inline]
    #[must_use]
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            seed_on_empty: true,
            default_theme: Theme::Light,
        }
    }
}
