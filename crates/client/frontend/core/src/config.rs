//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub views: ViewConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(views: ViewConfig, messages: MessageConfig) -> Self {
        Self { views, messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TRACKER_PANE_COUNT` - Number of synchronized tracker views (default: 2, 1..=4)
    /// - `TRACKER_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(count) = read_env::<usize>("TRACKER_PANE_COUNT") {
            config.views.pane_count = ViewConfig::clamp_pane_count(count);
        }

        if let Some(capacity) = read_env::<usize>("TRACKER_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct ViewConfig {
    /// How many views observe the same engine.
    pub pane_count: usize,
}

impl ViewConfig {
    pub const MAX_PANES: usize = 4;

    pub fn clamp_pane_count(count: usize) -> usize {
        count.clamp(1, Self::MAX_PANES)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { pane_count: 2 }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_two_window_layout() {
        let config = FrontendConfig::default();
        assert_eq!(config.views.pane_count, 2);
        assert_eq!(config.messages.capacity, 64);
    }

    #[test]
    fn pane_count_is_clamped() {
        assert_eq!(ViewConfig::clamp_pane_count(0), 1);
        assert_eq!(ViewConfig::clamp_pane_count(3), 3);
        assert_eq!(ViewConfig::clamp_pane_count(12), ViewConfig::MAX_PANES);
    }
}
