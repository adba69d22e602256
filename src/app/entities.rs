//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency instead of living in one monolith.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::i18n::Locale;
use crate::state::{
    archive_state::ArchiveState, config_state::ConfigState, connection_state::ConnectionState,
    counter_state::CounterState, i18n_state::I18nState, log_state::LogState, nav_state::NavState,
    notification_state::NotificationState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Archive endpoint health
    pub connection: Entity<ConnectionState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Active page
    pub nav: Entity<NavState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Counter widget value
    pub counter: Entity<CounterState>,
    /// In-flight submission and history
    pub archive: Entity<ArchiveState>,
    /// Transient toast
    pub notifications: Entity<NotificationState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(cx: &mut App, config: &AppConfig) -> Self {
        let locale = Locale::resolve(config.ui.locale.as_deref());
        let start_page = config.ui.start_page;

        Self {
            config: cx.new(|_| ConfigState::new(config.clone())),
            connection: cx.new(|_| ConnectionState::default()),
            logs: cx.new(|_| LogState::default()),
            nav: cx.new(|_| NavState::new(start_page)),
            i18n: cx.new(|_| I18nState::new(locale)),
            counter: cx.new(|_| CounterState::default()),
            archive: cx.new(|_| ArchiveState::default()),
            notifications: cx.new(|_| NotificationState::default()),
        }
    }
}
