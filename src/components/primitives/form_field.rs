//! FormField Component
//!
//! Label, input element and inline error message laid out as one row.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::colors::Palette;

/// A labelled form row
#[derive(IntoElement)]
pub struct FormField {
    label: SharedString,
    required: bool,
    error: Option<SharedString>,
    input: AnyElement,
}

impl FormField {
    pub fn new(label: impl Into<SharedString>, input: impl IntoElement) -> Self {
        Self {
            label: label.into(),
            required: false,
            error: None,
            input: input.into_any_element(),
        }
    }

    /// Mark the label with an asterisk
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn error(mut self, error: Option<SharedString>) -> Self {
        self.error = error;
        self
    }
}

impl RenderOnce for FormField {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_error = self.error.is_some();

        div()
            .w_full()
            .flex()
            .items_start()
            .gap_4()
            .child(
                div()
                    .w(px(180.0))
                    .pt_2()
                    .flex()
                    .gap_1()
                    .text_sm()
                    .text_color(Palette::text_secondary())
                    .child(self.label)
                    .when(self.required, |el| {
                        el.child(div().text_color(Palette::danger()).child("*"))
                    }),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .w_full()
                            .rounded_md()
                            .border_1()
                            .border_color(if has_error {
                                Palette::danger()
                            } else {
                                gpui::rgba(0x00000000)
                            })
                            .child(self.input),
                    )
                    .when_some(self.error, |el, error| {
                        el.child(
                            div()
                                .text_xs()
                                .text_color(Palette::danger())
                                .child(error),
                        )
                    }),
            )
    }
}
