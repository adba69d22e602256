//! Notification Overlay
//!
//! Renders the current transient notification in the top-right corner.

use gpui::{
    App, ClickEvent, Entity, InteractiveElement, IntoElement, ParentElement, RenderOnce, Styled,
    StatefulInteractiveElement, Window, div, prelude::*, px,
};

use crate::state::notification_state::{NotificationKind, NotificationState};
use crate::theme::colors::Palette;

/// Toast overlay bound to the notification state
#[derive(IntoElement)]
pub struct NotificationOverlay {
    state: Entity<NotificationState>,
}

impl NotificationOverlay {
    pub fn new(state: Entity<NotificationState>) -> Self {
        Self { state }
    }
}

impl RenderOnce for NotificationOverlay {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let Some(notification) = self.state.read(cx).current().cloned() else {
            return div().into_any_element();
        };

        let accent = match notification.kind {
            NotificationKind::Info => Palette::info(),
            NotificationKind::Success => Palette::success(),
            NotificationKind::Error => Palette::danger(),
        };
        let id = notification.id;
        let state = self.state.clone();

        div()
            .absolute()
            .top(px(56.0))
            .right(px(16.0))
            .child(
                div()
                    .id(("notification", id))
                    .min_w(px(280.0))
                    .max_w(px(420.0))
                    .px_4()
                    .py_3()
                    .bg(Palette::content_bg())
                    .border_2()
                    .border_color(Palette::border_strong())
                    .border_l_4()
                    .rounded_md()
                    .shadow_lg()
                    .cursor_pointer()
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        state.update(cx, |state, cx| {
                            if state.dismiss(id) {
                                cx.notify();
                            }
                        });
                    })
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(accent)
                            .child(notification.title),
                    )
                    .when_some(notification.detail, |el, detail| {
                        el.child(
                            div()
                                .text_xs()
                                .text_color(Palette::text_secondary())
                                .child(detail),
                        )
                    }),
            )
            .into_any_element()
    }
}
