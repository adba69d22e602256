//! DataTable Component

use gpui::{
    Context, Div, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
    prelude::*, px,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::Palette;

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    caption: Option<SharedString>,
    row_height: f32,
    header_height: f32,
    empty_message: SharedString,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            caption: None,
            row_height: 40.0,
            header_height: 44.0,
            empty_message: "No data".into(),
        }
    }

    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Text shown in a band above the header
    pub fn set_caption(&mut self, caption: Option<SharedString>) {
        self.caption = caption;
    }

    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    fn sized_cell(width: ColumnWidth) -> Div {
        match width {
            ColumnWidth::Fixed(w) => div().w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => div().flex_1().min_w(px(min)),
        }
    }

    fn render_caption(&self, caption: SharedString) -> impl IntoElement {
        div()
            .w_full()
            .p_6()
            .flex()
            .justify_center()
            .border_b_2()
            .border_color(Palette::border_strong())
            .text_size(px(24.0))
            .font_weight(gpui::FontWeight::BOLD)
            .text_color(Palette::text_primary())
            .child(caption)
    }

    fn render_header(&self) -> impl IntoElement {
        let last = self.columns.len().saturating_sub(1);
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(Palette::table_header_bg())
            .border_b_2()
            .border_color(Palette::border_strong())
            .children(self.columns.iter().enumerate().map(|(i, col)| {
                Self::sized_cell(col.width)
                    .h_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(i < last, |el| el.border_r_2().border_color(Palette::border_strong()))
                    .text_sm()
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(Palette::text_primary())
                    .child(col.label.clone())
            }))
    }

    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let last = self.columns.len().saturating_sub(1);
        let bg = if index % 2 == 0 {
            Palette::content_bg()
        } else {
            Palette::table_row_alt()
        };

        div()
            .id(("data-table-row", index))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(Palette::table_row_hover()))
            .border_b_2()
            .border_color(Palette::border_strong())
            .children(self.columns.iter().enumerate().map(|(i, col)| {
                Self::sized_cell(col.width)
                    .h_full()
                    .flex()
                    .items_center()
                    .justify_center()
                    .when(i < last, |el| el.border_r_2().border_color(Palette::border_strong()))
                    .text_sm()
                    .text_color(Palette::text_primary())
                    .overflow_hidden()
                    .child(col.render_cell(row))
            }))
    }

    fn render_empty(&self) -> impl IntoElement {
        div()
            .w_full()
            .py_6()
            .flex()
            .items_center()
            .justify_center()
            .text_color(Palette::text_muted())
            .child(self.empty_message.clone())
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(Palette::content_bg())
            .border_2()
            .border_color(Palette::border_strong())
            .when_some(self.caption.clone(), |el, caption| {
                el.child(self.render_caption(caption))
            })
            .child(self.render_header())
            .when(self.rows.is_empty(), |el| el.child(self.render_empty()))
            .children(
                self.rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| self.render_row(row, i)),
            )
    }
}
