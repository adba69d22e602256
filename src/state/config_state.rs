//! ConfigState - Application Configuration State

use crate::domain::config::AppConfig;
use crate::i18n::Locale;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
    /// Whether the last save failed
    pub save_failed: bool,
}

impl ConfigState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            save_failed: false,
        }
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AppConfig) {
        self.config = config;
    }

    /// Remember the chosen UI language
    pub fn set_locale(&mut self, locale: Locale) {
        self.config.ui.locale = Some(locale.tag().to_string());
    }

    pub fn endpoint(&self) -> &str {
        &self.config.api.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_locale_keeps_endpoint() {
        let mut state = ConfigState::new(AppConfig::default());
        let endpoint = state.endpoint().to_string();

        state.set_locale(Locale::ZhCN);
        assert_eq!(state.config.ui.locale.as_deref(), Some("zh-CN"));
        assert_eq!(Locale::resolve(state.config.ui.locale.as_deref()), Locale::ZhCN);
        assert_eq!(state.endpoint(), endpoint);
    }
}
