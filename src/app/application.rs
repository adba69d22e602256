//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px,
};
use gpui_component::Root;
use tracing::{error, info, warn};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::app::workspace::Workspace;
use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, ENDPOINT_ENV_VAR,
};
use crate::domain::config::AppConfig;
use crate::eventing::app_event::AppEvent;
use crate::features::counter::controller::CounterController;
use crate::helpers::{Increment, Quit, ShowArchive, ShowCounter, ShowWelcome, new_key_bindings};
use crate::i18n::t;
use crate::services::service_hub::ServiceHub;
use crate::utils::config_store;

/// Load `config.json`, falling back to defaults, then apply the env override
fn load_startup_config() -> (AppConfig, Option<String>) {
    let (config, warning) = match config_store::load_config::<AppConfig>(CONFIG_FILE_NAME) {
        Ok(config) => (config, None),
        Err(err) => {
            warn!("Failed to load config, using defaults: {:#}", err);
            (
                AppConfig::default(),
                Some(format!("Failed to load config, using defaults: {err:#}")),
            )
        }
    };
    let config = config.with_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok());
    (config, warning)
}

fn navigate(page: ActivePage, cx: &mut App) {
    let Some(entities) = cx.try_global::<AppEntities>().cloned() else {
        return;
    };
    entities.nav.update(cx, |nav, cx| {
        if nav.set_active_page(page) {
            cx.notify();
        }
    });
}

fn register_actions(cx: &mut App) {
    cx.bind_keys(new_key_bindings());

    cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
    cx.on_action(|_: &Increment, cx: &mut App| {
        if let Some(entities) = cx.try_global::<AppEntities>().cloned() {
            CounterController::new(entities).increment(cx);
        }
    });
    cx.on_action(|_: &ShowCounter, cx: &mut App| navigate(ActivePage::Counter, cx));
    cx.on_action(|_: &ShowArchive, cx: &mut App| navigate(ActivePage::Archive, cx));
    cx.on_action(|_: &ShowWelcome, cx: &mut App| navigate(ActivePage::Welcome, cx));
}

/// Run the archive GUI application
pub fn run_app() {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(|cx: &mut App| {
        gpui_component::init(cx);
        register_actions(cx);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let (config, load_warning) = load_startup_config();
        info!(endpoint = %config.api.endpoint, "Configuration ready");

        // Initialize global entities
        let entities = AppEntities::init(cx, &config);
        cx.set_global(entities.clone());

        // Create event channel for service -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        if let Some(message) = load_warning {
            let _ = event_tx.send(AppEvent::warn(message));
        }

        // Initialize service hub
        let service_hub = ServiceHub::new(config, event_tx);
        cx.set_global(service_hub);

        let locale = entities.i18n.read(cx).locale;
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(t(locale, "app-title"))),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, move |window, cx| {
            let view: AnyView = cx
                .new(|cx| Workspace::new(entities, event_rx, window, cx))
                .into();
            cx.new(|cx| Root::new(view, window, cx))
        });
        if let Err(err) = opened {
            error!("Failed to open main window: {:#}", err);
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
