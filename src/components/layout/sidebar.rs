//! Sidebar Component
//!
//! Navigation sidebar with page links.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::constants::SIDEBAR_WIDTH;
use crate::helpers::humanize_keystroke;
use crate::i18n::{Locale, t};
use crate::theme::colors::Palette;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe navigation changes
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        page: ActivePage,
        locale: Locale,
        active_page: ActivePage,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let label = t(locale, page.title_key());
        let entities = self.entities.clone();

        let (bg_color, text_color, border_color) = if is_active {
            (
                Palette::button_ghost_hover(),
                Palette::text_primary(),
                Palette::border_strong(),
            )
        } else {
            (
                gpui::rgba(0x00000000),
                Palette::text_secondary(),
                gpui::rgba(0x00000000),
            )
        };

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(Palette::button_ghost_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.nav.update(cx, |nav, cx| {
                    if nav.set_active_page(page) {
                        cx.notify();
                    }
                });
            })
            .child(label)
            .child(
                div()
                    .text_size(px(11.0))
                    .text_color(Palette::text_muted())
                    .child(humanize_keystroke(page.shortcut())),
            )
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let active_page = self.entities.nav.read(cx).active_page;

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(Palette::sidebar_bg())
            .border_r_1()
            .border_color(Palette::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                ActivePage::all()
                    .iter()
                    .map(|page| self.render_nav_item(*page, locale, active_page)),
            )
    }
}
