//! Transient notifications (toasts)
//!
//! One notification is visible at a time. Showing a new one replaces the
//! current one, and a dismissal timer only clears the notification it was
//! started for.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Surface that accepts outcome messages from handlers
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Last-write-wins holder for the visible notification
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    last_id: u64,
}

impl NotificationSlot {
    /// Replace the visible notification, returning the id of the new one
    pub fn show(&mut self, kind: NotificationKind, message: &str) -> u64 {
        self.last_id += 1;
        self.current = Some(Notification {
            id: self.last_id,
            kind,
            message: message.to_string(),
        });
        self.last_id
    }

    /// Clear the notification with `id` if it is still the visible one
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().map(|n| n.id) == Some(id) {
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

/// Reactive notification surface provided through context
#[derive(Clone, Copy)]
pub struct NotificationService {
    slot: RwSignal<NotificationSlot>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(NotificationSlot::default()),
            timeout_ms,
        }
    }

    /// Visible notification (tracked)
    pub fn current(&self) -> Option<Notification> {
        self.slot.with(|slot| slot.current().cloned())
    }

    pub fn dismiss(&self, id: u64) {
        self.slot.try_update(|slot| slot.dismiss(id));
    }

    fn show(&self, kind: NotificationKind, message: &str) {
        let mut id = 0;
        self.slot.update(|slot| id = slot.show(kind, message));

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(service.timeout_ms).await;
            service.dismiss(id);
        });
    }
}

impl Notifier for NotificationService {
    fn success(&self, message: &str) {
        self.show(NotificationKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.show(NotificationKind::Error, message);
    }
}

/// Hook to access the notification surface
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in component tree")
}

/// Renders the visible notification in the corner of the page
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="notification-host" style="position: fixed; right: 16px; bottom: 16px; z-index: 1000; min-width: 280px;">
            {move || notifications.current().map(|notification| {
                let intent = match notification.kind {
                    NotificationKind::Success => MessageBarIntent::Success,
                    NotificationKind::Error => MessageBarIntent::Error,
                };
                let id = notification.id;

                view! {
                    <MessageBar intent=intent>
                        <div style="display: flex; align-items: center; justify-content: space-between; gap: 8px; width: 100%;">
                            <span>{notification.message}</span>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                size=ButtonSize::Small
                                on_click=move |_| notifications.dismiss(id)
                            >
                                {icon("x")}
                            </Button>
                        </div>
                    </MessageBar>
                }
            })}
        </div>
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Collects every message passed to it
    #[derive(Default)]
    pub struct RecordingNotifier {
        messages: RefCell<Vec<(NotificationKind, String)>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<(NotificationKind, String)> {
            self.messages.borrow().clone()
        }

        pub fn count(&self, kind: NotificationKind) -> usize {
            self.messages.borrow().iter().filter(|(k, _)| *k == kind).count()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.messages
                .borrow_mut()
                .push((NotificationKind::Success, message.to_string()));
        }

        fn error(&self, message: &str) {
            self.messages
                .borrow_mut()
                .push((NotificationKind::Error, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_notification_replaces_older() {
        let mut slot = NotificationSlot::default();
        let first = slot.show(NotificationKind::Success, "Username Updated Successfully!");
        let second = slot.show(NotificationKind::Error, "Failed to update password. Please try again.");

        assert_ne!(first, second);
        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.kind, NotificationKind::Error);
    }

    #[test]
    fn test_stale_dismissal_keeps_newer_notification() {
        let mut slot = NotificationSlot::default();
        let first = slot.show(NotificationKind::Success, "first");
        let second = slot.show(NotificationKind::Success, "second");

        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("second"));

        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss_when_empty() {
        let mut slot = NotificationSlot::default();
        assert!(!slot.dismiss(1));
    }
}
