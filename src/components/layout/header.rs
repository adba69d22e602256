//! Header Component
//!
//! The application header with title, endpoint status and language switcher.

use gpui::{
    App, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use tracing::{error, info, warn};

use crate::app::entities::AppEntities;
use crate::constants::{CONFIG_FILE_NAME, HEADER_HEIGHT};
use crate::i18n::t;
use crate::services::service_hub::ServiceHub;
use crate::state::connection_state::HealthStatus;
use crate::theme::colors::Palette;
use crate::utils::config_store;
use crate::utils::format::{format_time_ms, truncate};

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe connection changes
        cx.observe(&entities.connection, |_this, _, cx| cx.notify())
            .detach();

        // Endpoint edits change the indicator caption
        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_health_indicator(&self, cx: &Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let conn = self.entities.connection.read(cx);
        let status = conn.status();
        let endpoint = self.entities.config.read(cx).endpoint().to_string();

        let color = match status {
            HealthStatus::Online => Palette::success(),
            HealthStatus::Offline => Palette::danger(),
            HealthStatus::Unknown => Palette::offline(),
        };

        let mut caption = format!("{} · {}", t(locale, status.label_key()), endpoint);
        if let (HealthStatus::Offline, Some(detail)) = (status, conn.detail()) {
            caption.push_str(&format!(" ({})", truncate(detail, 48)));
        }
        let checked = conn.last_checked().map(|at| format_time_ms(&at));

        div()
            .id("health-indicator")
            .flex()
            .items_center()
            .gap_2()
            .px_2()
            .py_1()
            .rounded_md()
            .cursor_pointer()
            .hover(|s| s.bg(Palette::subtle_overlay()))
            .on_click(|_event: &ClickEvent, _window, cx| {
                if let Some(hub) = cx.try_global::<ServiceHub>()
                    && let Err(err) = hub.check_health()
                {
                    error!("Health probe not requested: {}", err);
                }
            })
            .child(
                div()
                    .text_color(color)
                    .text_size(px(10.0))
                    .child(status.symbol()),
            )
            .child(
                div()
                    .text_color(Palette::text_light())
                    .text_size(px(12.0))
                    .child(caption),
            )
            .when_some(checked, |el, checked| {
                el.child(
                    div()
                        .text_color(Palette::text_muted())
                        .text_size(px(11.0))
                        .child(checked),
                )
            })
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.toggled().display_name();

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(Palette::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(Palette::text_light())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(Palette::header_bg())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("A"),
                    )
                    .child(
                        div()
                            .text_color(Palette::text_light())
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    ),
            )
            // Right side: endpoint status and language switcher
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_6()
                    .child(self.render_health_indicator(cx))
                    .child(
                        div()
                            .id("lang-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(Palette::subtle_overlay())
                            .text_color(Palette::text_light())
                            .text_size(px(13.0))
                            .cursor_pointer()
                            .hover(|s| s.bg(Palette::strong_overlay()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                toggle_language(&entities, cx);
                            })
                            .child(lang_label),
                    ),
            )
    }
}

/// Switch the UI language and persist the choice
fn toggle_language(entities: &AppEntities, cx: &mut App) {
    let locale = entities.i18n.update(cx, |i18n, cx| {
        i18n.toggle_locale();
        cx.notify();
        i18n.locale
    });
    let config = entities.config.update(cx, |state, cx| {
        state.set_locale(locale);
        cx.notify();
        state.config.clone()
    });
    match config_store::save_config(CONFIG_FILE_NAME, &config) {
        Ok(()) => info!(locale = locale.tag(), "Language switched"),
        Err(err) => warn!("Failed to persist language: {:#}", err),
    }
}
