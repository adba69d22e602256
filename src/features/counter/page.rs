//! Counter Page
//!
//! Large counter with an increment button above the sample table. The
//! table caption follows the counter value.

use gpui::{
    ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Rgba, SharedString, Styled,
    Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable};
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::sample::{DataItem, sample_rows};
use crate::features::counter::controller::CounterController;
use crate::helpers::{INCREMENT_KEYSTROKE, humanize_keystroke};
use crate::i18n::{Locale, t};
use crate::theme::colors::Palette;

/// Counter page component
pub struct CounterPage {
    entities: AppEntities,
    controller: CounterController,
    table: Entity<DataTable<DataItem>>,
}

impl CounterPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = CounterController::new(entities.clone());
        let table = cx.new(|cx| {
            let mut table = DataTable::new(cx);
            table.set_rows(sample_rows());
            table
        });

        // The caption shows the current count
        cx.observe(&entities.counter, |this, _, cx| this.sync_table(cx))
            .detach();

        // Column labels and caption are translated
        cx.observe(&entities.i18n, |this, _, cx| this.sync_table(cx))
            .detach();

        let mut page = Self {
            entities,
            controller,
            table,
        };
        page.sync_table(cx);
        page
    }

    fn sync_table(&mut self, cx: &mut Context<Self>) {
        let locale = self.entities.i18n.read(cx).locale;
        let count = self.entities.counter.read(cx).count();
        self.table.update(cx, |table, cx| {
            table.set_columns(table_columns(locale));
            table.set_caption(Some(count_caption(locale, count)));
            table.set_empty_message(t(locale, "table-no-data"));
            cx.notify();
        });
        cx.notify();
    }

    fn render_counter(&self, locale: Locale, count: u64) -> impl IntoElement {
        let controller = self.controller.clone();

        div()
            .w_full()
            .p_6()
            .flex()
            .flex_col()
            .items_center()
            .gap_4()
            .bg(Palette::content_bg())
            .border_2()
            .border_color(Palette::border_strong())
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(Palette::text_secondary())
                    .child(t(locale, "counter-title")),
            )
            .child(
                div()
                    .text_size(px(64.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(Palette::text_primary())
                    .child(count.to_string()),
            )
            .child(
                Button::primary("counter-increment", "+")
                    .size(ButtonSize::Large)
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        controller.increment(cx);
                    }),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(Palette::text_muted())
                    .child(humanize_keystroke(INCREMENT_KEYSTROKE)),
            )
    }
}

impl Render for CounterPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let count = self.entities.counter.read(cx).count();

        div()
            .id("counter-page")
            .size_full()
            .p_6()
            .flex()
            .flex_col()
            .gap_6()
            .overflow_y_scroll()
            .child(self.render_counter(locale, count))
            .child(self.table.clone())
    }
}

/// Caption above the table header
fn count_caption(locale: Locale, count: u64) -> SharedString {
    format!("{}: {}", t(locale, "counter-current"), count).into()
}

fn status_color(status: &str) -> Rgba {
    match status {
        "Active" => Palette::success(),
        "Pending" => Palette::warning(),
        "Completed" => Palette::info(),
        _ => Palette::text_muted(),
    }
}

/// Column layout of the sample table
fn table_columns(locale: Locale) -> Vec<Column<DataItem>> {
    vec![
        Column::new("id", t(locale, "col-id"), |item: &DataItem| {
            div().child(item.id.to_string()).into_any_element()
        })
        .fixed_width(80.0),
        Column::new("name", t(locale, "col-name"), |item: &DataItem| {
            div().child(item.name).into_any_element()
        })
        .flex_width(120.0),
        Column::new("description", t(locale, "col-description"), |item: &DataItem| {
            div().child(item.description).into_any_element()
        })
        .flex_width(180.0),
        Column::new("status", t(locale, "col-status"), |item: &DataItem| {
            div()
                .text_color(status_color(item.status))
                .font_weight(gpui::FontWeight::MEDIUM)
                .child(item.status)
                .into_any_element()
        })
        .fixed_width(120.0),
        Column::new("date", t(locale, "col-date"), |item: &DataItem| {
            div().child(item.date).into_any_element()
        })
        .fixed_width(120.0),
    ]
}
