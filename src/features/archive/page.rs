//! Archive Page
//!
//! Endpoint row, submission form and the recent submission history.

use gpui::{
    App, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window, div, prelude::*, px,
};
use gpui_component::input::{Input, InputEvent, InputState};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::form_field::FormField as FieldRow;
use crate::features::archive::controller::{ArchiveController, SubmitAttempt, describe_submit_error};
use crate::features::archive::form::{ArchiveForm, FormErrors, FormField};
use crate::i18n::{Locale, t};
use crate::state::archive_state::SubmissionRecord;
use crate::theme::colors::Palette;
use crate::utils::format::{format_local_datetime, format_reading, truncate};

/// Archive page component
pub struct ArchivePage {
    entities: AppEntities,
    controller: ArchiveController,
    /// One input per text field, in rendering order
    inputs: Vec<(FormField, Entity<InputState>)>,
    endpoint_input: Entity<InputState>,
    calibrated: bool,
    updated: bool,
    errors: FormErrors,
    /// Request whose success resets the form
    awaiting: Option<String>,
    _subscriptions: Vec<Subscription>,
}

impl ArchivePage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = ArchiveController::new(entities.clone());
        let mut subscriptions = Vec::new();

        let inputs: Vec<_> = FormField::ALL
            .iter()
            .map(|field| {
                let placeholder = field.placeholder();
                let state = cx.new(|cx| InputState::new(window, cx).placeholder(placeholder));
                (*field, state)
            })
            .collect();

        for (_, state) in &inputs {
            subscriptions.push(cx.subscribe(state, |this, _state, event: &InputEvent, cx| {
                match event {
                    // Errors follow the input once they are visible
                    InputEvent::Change if !this.errors.is_empty() => {
                        this.errors = this.collect_form(cx).validate().err().unwrap_or_default();
                        cx.notify();
                    }
                    InputEvent::PressEnter { .. } => this.submit(cx),
                    _ => {}
                }
            }));
        }

        let endpoint = entities.config.read(cx).endpoint().to_string();
        let endpoint_input = cx.new(|cx| {
            let mut state = InputState::new(window, cx).placeholder("http://localhost:8000");
            state.set_value(endpoint, window, cx);
            state
        });
        subscriptions.push(cx.subscribe(&endpoint_input, |this, _state, event: &InputEvent, cx| {
            if matches!(event, InputEvent::PressEnter { .. }) {
                this.save_endpoint(cx);
            }
        }));

        // Reset the inputs once the awaited submission succeeds
        subscriptions.push(cx.observe_in(&entities.archive, window, |this, archive, window, cx| {
            if let Some(request_id) = this.awaiting.clone() {
                let settled = archive.read(cx).outcome(&request_id).map(Result::is_ok);
                match settled {
                    Some(true) => {
                        this.awaiting = None;
                        this.reset_form(window, cx);
                    }
                    Some(false) => this.awaiting = None,
                    None => {}
                }
            }
            cx.notify();
        }));

        // Keep the endpoint input in sync with applied configuration
        subscriptions.push(cx.observe_in(&entities.config, window, |this, config, window, cx| {
            let endpoint = config.read(cx).endpoint().to_string();
            if this.endpoint_input.read(cx).value().as_ref() != endpoint.as_str() {
                this.endpoint_input.update(cx, |state, cx| {
                    state.set_value(endpoint, window, cx);
                });
            }
            cx.notify();
        }));

        subscriptions.push(cx.observe(&entities.i18n, |_this, _, cx| cx.notify()));

        Self {
            entities,
            controller,
            inputs,
            endpoint_input,
            calibrated: false,
            updated: false,
            errors: FormErrors::default(),
            awaiting: None,
            _subscriptions: subscriptions,
        }
    }

    fn collect_form(&self, cx: &App) -> ArchiveForm {
        let mut form = ArchiveForm {
            calibrated: self.calibrated,
            updated: self.updated,
            ..Default::default()
        };
        for (field, state) in &self.inputs {
            form.set_value(*field, state.read(cx).value().to_string());
        }
        form
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let form = self.collect_form(cx);
        match self.controller.submit(&form, cx) {
            SubmitAttempt::Sent(request_id) => {
                self.errors.clear();
                self.awaiting = Some(request_id);
            }
            SubmitAttempt::Invalid(errors) => self.errors = errors,
            SubmitAttempt::Failed(_) => self.errors.clear(),
            SubmitAttempt::Busy => {}
        }
        cx.notify();
    }

    fn save_endpoint(&mut self, cx: &mut Context<Self>) {
        let raw = self.endpoint_input.read(cx).value().to_string();
        self.controller.save_endpoint(&raw, cx);
        cx.notify();
    }

    fn reset_form(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        for (_, state) in &self.inputs {
            state.update(cx, |state, cx| state.set_value("", window, cx));
        }
        self.calibrated = false;
        self.updated = false;
        self.errors.clear();
    }

    fn render_section_title(&self, title: SharedString) -> impl IntoElement {
        div()
            .w_full()
            .pb_2()
            .border_b_1()
            .border_color(Palette::border())
            .text_size(px(16.0))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .text_color(Palette::text_primary())
            .child(title)
    }

    fn render_endpoint_row(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let save_failed = self.entities.config.read(cx).save_failed;

        div()
            .w_full()
            .flex()
            .items_start()
            .gap_2()
            .child(
                div().flex_1().child(
                    FieldRow::new(t(locale, "archive-endpoint"), Input::new(&self.endpoint_input))
                        .error(save_failed.then(|| t(locale, "archive-endpoint-save-failed"))),
                ),
            )
            .child(
                Button::ghost("archive-save-endpoint", t(locale, "action-save")).on_click(
                    cx.listener(|this, _event: &ClickEvent, _window, cx| this.save_endpoint(cx)),
                ),
            )
    }

    fn render_fields(&self, locale: Locale) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_3()
            .children(self.inputs.iter().map(|(field, state)| {
                let error = self
                    .errors
                    .get(*field)
                    .map(|err| t(locale, err.message_key()));
                FieldRow::new(t(locale, field.label_key()), Input::new(state))
                    .required(field.is_required())
                    .error(error)
            }))
    }

    fn render_flags(&self, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .gap_6()
            .pl(px(196.0))
            .child(
                Checkbox::new("archive-calibrated")
                    .checked(self.calibrated)
                    .label(t(locale, "archive-calibrated"))
                    .on_change(cx.listener(|this, checked: &bool, _window, cx| {
                        this.calibrated = *checked;
                        cx.notify();
                    })),
            )
            .child(
                Checkbox::new("archive-updated")
                    .checked(self.updated)
                    .label(t(locale, "archive-updated"))
                    .on_change(cx.listener(|this, checked: &bool, _window, cx| {
                        this.updated = *checked;
                        cx.notify();
                    })),
            )
    }

    fn render_history_row(&self, locale: Locale, record: &SubmissionRecord) -> impl IntoElement {
        let (color, outcome): (_, SharedString) = match &record.outcome {
            None => (Palette::warning(), t(locale, "archive-pending")),
            Some(Ok(created)) => (Palette::success(), format!("#{}", created.id).into()),
            Some(Err(err)) => {
                let (title, detail) = describe_submit_error(locale, err);
                let text = match detail {
                    Some(detail) => format!("{title}: {}", truncate(&detail, 60)),
                    None => title.to_string(),
                };
                (Palette::danger(), text.into())
            }
        };

        div()
            .w_full()
            .py_1()
            .flex()
            .items_center()
            .gap_4()
            .text_sm()
            .border_b_1()
            .border_color(Palette::border())
            .child(
                div()
                    .w(px(150.0))
                    .text_color(Palette::text_muted())
                    .child(format_local_datetime(&record.submitted_at)),
            )
            .child(
                div()
                    .w(px(100.0))
                    .text_color(Palette::text_primary())
                    .child(format_reading(record.payload.number)),
            )
            .child(
                div()
                    .w(px(140.0))
                    .text_color(Palette::text_secondary())
                    .child(record.payload.metadata.device_id.clone()),
            )
            .child(div().flex_1().text_color(color).child(outcome))
    }
}

impl Render for ArchivePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let archive = self.entities.archive.read(cx);
        let submitting = archive.is_submitting();
        let history: Vec<SubmissionRecord> = archive.history().cloned().collect();

        div()
            .id("archive-page")
            .size_full()
            .p_6()
            .flex()
            .flex_col()
            .gap_6()
            .overflow_y_scroll()
            .child(
                div()
                    .w_full()
                    .max_w(px(760.0))
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .bg(Palette::content_bg())
                    .border_2()
                    .border_color(Palette::border_strong())
                    .child(self.render_section_title(t(locale, "archive-title")))
                    .child(self.render_endpoint_row(locale, cx))
                    .child(self.render_fields(locale))
                    .child(self.render_flags(locale, cx))
                    .child(
                        div().pl(px(196.0)).child(
                            Button::primary("archive-submit", t(locale, "action-submit"))
                                .loading(submitting)
                                .loading_label(t(locale, "archive-submitting"))
                                .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                    this.submit(cx);
                                })),
                        ),
                    ),
            )
            .child(
                div()
                    .w_full()
                    .max_w(px(760.0))
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.render_section_title(t(locale, "archive-history")))
                    .when(history.is_empty(), |el| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(Palette::text_muted())
                                .child(t(locale, "archive-no-history")),
                        )
                    })
                    .children(
                        history
                            .iter()
                            .map(|record| self.render_history_row(locale, record)),
                    ),
            )
    }
}
