//! Log Panel Component
//!
//! Displays application logs at the bottom of the screen.

use gpui::{
    ClickEvent, Context, Div, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, Stateful, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::constants::{
    LOG_PANEL_COLLAPSED_HEIGHT, LOG_PANEL_EXPANDED_HEIGHT, LOG_PANEL_VISIBLE_LINES,
};
use crate::i18n::t;
use crate::state::log_state::LogEntry;
use crate::theme::colors::Palette;
use crate::utils::format::format_time_ms;

/// Log panel component
pub struct LogPanel {
    entities: AppEntities,
    expanded: bool,
}

impl LogPanel {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe log changes
        cx.observe(&entities.logs, |_this, _, cx| cx.notify())
            .detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            expanded: true,
        }
    }

    fn toggle_expanded(&mut self, cx: &mut Context<Self>) {
        self.expanded = !self.expanded;
        cx.notify();
    }

    fn render_log_entry(&self, entry: &LogEntry) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .items_center()
            .gap_2()
            .py_px()
            .child(
                div()
                    .text_color(Palette::text_muted())
                    .text_size(px(11.0))
                    .min_w(px(85.0))
                    .child(format_time_ms(&entry.timestamp)),
            )
            .child(
                div()
                    .text_color(entry.level.color())
                    .text_size(px(11.0))
                    .min_w(px(45.0))
                    .child(entry.level.label()),
            )
            .child(
                div()
                    .text_color(Palette::text_light())
                    .text_size(px(12.0))
                    .flex_1()
                    .child(entry.message.clone()),
            )
    }

    fn render_tool_button(&self, id: &'static str, label: impl Into<SharedString>) -> Stateful<Div> {
        div()
            .id(id)
            .px_2()
            .py_1()
            .rounded_sm()
            .text_color(Palette::text_muted())
            .text_size(px(11.0))
            .cursor_pointer()
            .hover(|s| s.bg(Palette::subtle_overlay()))
            .child(label.into())
    }
}

impl Render for LogPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let (count, entries) = {
            let logs = self.entities.logs.read(cx);
            let entries: Vec<LogEntry> = if self.expanded {
                logs.recent(LOG_PANEL_VISIBLE_LINES).cloned().collect()
            } else {
                Vec::new()
            };
            (logs.len(), entries)
        };

        let height = if self.expanded {
            px(LOG_PANEL_EXPANDED_HEIGHT)
        } else {
            px(LOG_PANEL_COLLAPSED_HEIGHT)
        };

        let entities = self.entities.clone();

        div()
            .h(height)
            .w_full()
            .bg(Palette::log_panel_bg())
            .flex()
            .flex_col()
            // Header
            .child(
                div()
                    .h(px(LOG_PANEL_COLLAPSED_HEIGHT))
                    .w_full()
                    .px_4()
                    .flex()
                    .items_center()
                    .justify_between()
                    .border_b_1()
                    .border_color(Palette::subtle_overlay())
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_color(Palette::text_light())
                                    .text_size(px(13.0))
                                    .font_weight(gpui::FontWeight::MEDIUM)
                                    .child(t(locale, "log-title")),
                            )
                            .child(
                                div()
                                    .text_color(Palette::text_muted())
                                    .text_size(px(11.0))
                                    .child(format!("({count})")),
                            ),
                    )
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                self.render_tool_button("clear-logs", t(locale, "log-clear"))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        entities.logs.update(cx, |logs, cx| {
                                            logs.clear();
                                            cx.notify();
                                        });
                                    }),
                            )
                            .child(
                                self.render_tool_button(
                                    "toggle-logs",
                                    if self.expanded { "▼" } else { "▲" },
                                )
                                .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.toggle_expanded(cx);
                                })),
                            ),
                    ),
            )
            // Newest first, only when expanded
            .when(self.expanded, |panel| {
                panel.child(
                    div()
                        .id("log-entries")
                        .flex_1()
                        .overflow_y_scroll()
                        .px_4()
                        .py_1()
                        .children(entries.iter().map(|entry| self.render_log_entry(entry))),
                )
            })
    }
}
