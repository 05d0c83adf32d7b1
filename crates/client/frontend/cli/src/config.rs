//! Terminal layout settings.
use std::env;

/// Settings that only make sense for the terminal frontend.
///
/// View count and message capacity are shared by all frontends and live in
/// `FrontendConfig`.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Reads `CLI_MESSAGE_PANEL_HEIGHT` (lines including borders, default 6,
    /// at least 3).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = env::var("CLI_MESSAGE_PANEL_HEIGHT")
            .ok()
            .and_then(|raw| raw.trim().parse::<u16>().ok())
        {
            config.ui.message_panel_height = UiConfig::clamp_panel_height(height);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of the message panel, borders included.
    pub message_panel_height: u16,
}

impl UiConfig {
    /// Two border lines plus at least one message.
    pub const MIN_PANEL_HEIGHT: u16 = 3;

    pub fn clamp_panel_height(height: u16) -> u16 {
        height.max(Self::MIN_PANEL_HEIGHT)
    }

    /// Message lines visible inside the panel.
    pub fn visible_messages(&self) -> usize {
        self.message_panel_height.saturating_sub(2) as usize
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_panel_shows_four_messages() {
        let config = CliConfig::default();
        assert_eq!(config.ui.message_panel_height, 6);
        assert_eq!(config.ui.visible_messages(), 4);
    }

    #[test]
    fn panel_height_has_a_floor() {
        assert_eq!(UiConfig::clamp_panel_height(0), UiConfig::MIN_PANEL_HEIGHT);
        assert_eq!(UiConfig::clamp_panel_height(2), 3);
        assert_eq!(UiConfig::clamp_panel_height(12), 12);

        let tight = UiConfig {
            message_panel_height: UiConfig::clamp_panel_height(1),
        };
        assert_eq!(tight.visible_messages(), 1);
    }
}
