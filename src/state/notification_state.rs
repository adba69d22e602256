//! NotificationState - Transient Toast Notification

use std::time::Duration;

use gpui::{App, Entity, SharedString};

use crate::constants::NOTIFICATION_DURATION_MS;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// A single notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: SharedString,
    pub detail: Option<SharedString>,
}

/// Holds at most one notification; a newer one replaces the older
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Show a notification and return its id
    pub fn show(
        &mut self,
        kind: NotificationKind,
        title: impl Into<SharedString>,
        detail: Option<SharedString>,
    ) -> u64 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            kind,
            title: title.into(),
            detail,
        });
        self.next_id
    }

    /// Dismiss the notification only if it is still the one with `id`
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

/// Show a notification and schedule its automatic dismissal
pub fn push_notification(
    notifications: &Entity<NotificationState>,
    kind: NotificationKind,
    title: impl Into<SharedString>,
    detail: Option<SharedString>,
    cx: &mut App,
) {
    let title = title.into();
    let id = notifications.update(cx, |state, cx| {
        let id = state.show(kind, title, detail);
        cx.notify();
        id
    });

    let notifications = notifications.clone();
    cx.spawn(async move |cx| {
        cx.background_executor()
            .timer(Duration::from_millis(NOTIFICATION_DURATION_MS))
            .await;
        let _ = notifications.update(cx, |state, cx| {
            if state.dismiss(id) {
                cx.notify();
            }
        });
    })
    .detach();
}
