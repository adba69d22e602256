//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header, sidebar, content area and log panel.
//! It also runs the event pump that bridges service events to UI updates.

use gpui::{
    AnyElement, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::*,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::composite::notification::NotificationOverlay;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::components::layout::sidebar::Sidebar;
use crate::eventing::app_event::AppEvent;
use crate::features::archive::controller::ArchiveController;
use crate::features::archive::page::ArchivePage;
use crate::features::counter::page::CounterPage;
use crate::features::welcome::page::WelcomePage;
use crate::theme::colors::Palette;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    log_panel: Entity<LogPanel>,
    // Page views, created on first visit and kept afterwards
    counter_page: Option<Entity<CounterPage>>,
    archive_page: Option<Entity<ArchivePage>>,
    welcome_page: Option<Entity<WelcomePage>>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        // Start event pump
        Self::start_event_pump(event_rx, entities.clone(), cx);

        // Page switches and toasts re-render the shell
        cx.observe(&entities.nav, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.notifications, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            sidebar,
            log_panel,
            counter_page: None,
            archive_page: None,
            welcome_page: None,
        }
    }

    /// Start the event pump that dispatches service events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    /// Get or create the view for `page`
    fn page_view(
        &mut self,
        page: ActivePage,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let entities = self.entities.clone();
        match page {
            ActivePage::Counter => self
                .counter_page
                .get_or_insert_with(|| cx.new(|cx| CounterPage::new(entities, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Archive => self
                .archive_page
                .get_or_insert_with(|| cx.new(|cx| ArchivePage::new(entities, window, cx)))
                .clone()
                .into_any_element(),
            ActivePage::Welcome => self
                .welcome_page
                .get_or_insert_with(|| cx.new(|cx| WelcomePage::new(entities, cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.nav.read(cx).active_page;
        let content = self.page_view(active_page, window, cx);

        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(Palette::background())
            .child(self.header.clone())
            .child(
                // Main content area
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(
                        div()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .bg(Palette::background())
                            .child(content),
                    ),
            )
            .child(self.log_panel.clone())
            .child(NotificationOverlay::new(self.entities.notifications.clone()))
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::ConnectionChanged {
            endpoint,
            online,
            detail,
            checked_at,
        } => {
            if entities.config.read(cx).endpoint() != endpoint {
                debug!(%endpoint, "Ignoring health result for a previous endpoint");
                return;
            }
            entities.connection.update(cx, |conn, cx| {
                conn.set_status(online, detail, checked_at);
                cx.notify();
            });
        }
        AppEvent::ConfigLoaded { config } => {
            entities.config.update(cx, |state, cx| {
                if state.config != config {
                    state.update_config(config);
                    cx.notify();
                }
            });
        }
        AppEvent::ArchiveSubmitted {
            request_id,
            outcome,
        } => {
            ArchiveController::new(entities.clone()).settle(&request_id, outcome, cx);
        }
    }
}
