//! Welcome Page
//!
//! Greeting card with a click counter of its own.

use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::i18n::{clicked_message, t};
use crate::theme::colors::Palette;

/// Welcome page component
pub struct WelcomePage {
    entities: AppEntities,
    /// Independent of the counter page
    clicks: u64,
}

impl WelcomePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            clicks: 0,
        }
    }

    fn click(&mut self, cx: &mut Context<Self>) {
        self.clicks = self.clicks.saturating_add(1);
        debug!(clicks = self.clicks, "Welcome button clicked");
        cx.notify();
    }
}

impl Render for WelcomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(Palette::welcome_bg())
            .child(
                div()
                    .w(px(480.0))
                    .p_8()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_6()
                    .bg(Palette::content_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .child(
                        div()
                            .text_size(px(28.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(Palette::text_accent())
                            .child(t(locale, "welcome-title")),
                    )
                    .child(
                        div()
                            .text_size(px(16.0))
                            .text_color(Palette::text_secondary())
                            .child(clicked_message(locale, self.clicks)),
                    )
                    .child(
                        Button::accent("welcome-click", t(locale, "action-click-me"))
                            .size(ButtonSize::Large)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.click(cx);
                            })),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(Palette::text_muted())
                            .child(t(locale, "welcome-footer")),
                    ),
            )
    }
}
