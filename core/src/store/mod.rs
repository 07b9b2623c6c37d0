//! Notification store: the single owner of dashboard notification state.

use std::time::SystemTime;
use tracing::debug;

use crate::types::{FaxArrival, NotificationId, NotificationRecord};

pub(crate) mod event;
pub use event::DashboardEvent;

/// Owns the notification collection, the selection slot and the dropdown
/// visibility flag. All mutation goes through the methods below; `&mut self`
/// is the only exclusivity mechanism the single-threaded workflow needs.
pub struct NotificationStore {
    /// Most-recently-created first.
    notifications: Vec<NotificationRecord>,
    /// Snapshot of the notification the user most recently opened. A clone,
    /// not an index: the collection may mutate while the inbox view still
    /// holds the hand-over.
    selected: Option<NotificationRecord>,
    dropdown_open: bool,
    next_seq: u64,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            selected: None,
            dropdown_open: false,
            next_seq: 0,
        }
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Event dispatch.
impl NotificationStore {
    /// Applies one dashboard event. The match below is the complete
    /// transition table of the workflow.
    pub fn apply(&mut self, event: DashboardEvent, now: SystemTime) {
        match event {
            DashboardEvent::NewFaxArrived(arrival) => {
                self.add_notification(arrival, now);
            }
            DashboardEvent::NotificationSelected(id) => {
                self.select_notification(&id);
            }
            DashboardEvent::MarkAllRead => self.mark_all_read(),
            DashboardEvent::SelectionConsumed => self.clear_selection(),
        }
    }
}

/// Collection mutations.
impl NotificationStore {
    /// Prepends a new unread notification and returns its generated id.
    /// Always succeeds.
    pub fn add_notification(&mut self, arrival: FaxArrival, now: SystemTime) -> NotificationId {
        let id = NotificationId::generate(now, self.next_seq);
        self.next_seq += 1;

        let record = NotificationRecord::from_arrival(id.clone(), arrival, now);
        debug!(id = %id, sender = %record.from_number, pages = record.pages.into_inner(), "new fax notification");
        self.notifications.insert(0, record);
        id
    }

    /// Flips every notification to read. Idempotent.
    pub fn mark_all_read(&mut self) {
        debug!(unread = self.unread_count(), "mark all notifications read");
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }
}

/// Selection.
impl NotificationStore {
    /// Marks the referenced notification read, snapshots it into the
    /// selection slot and closes the dropdown. An unknown id is a silent
    /// no-op returning `false`.
    pub fn select_notification(&mut self, id: &NotificationId) -> bool {
        let Some(notification) = self.notifications.iter_mut().find(|n| n.id == *id) else {
            debug!(id = %id, "selection ignored: unknown notification id");
            return false;
        };

        notification.read = true;
        self.selected = Some(notification.clone());
        self.dropdown_open = false;
        true
    }

    /// Empties the selection slot. Idempotent.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&NotificationRecord> {
        self.selected.as_ref()
    }
}

/// Derived queries.
impl NotificationStore {
    /// Count of unread notifications. Always a fresh pass over the live
    /// collection, never cached.
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Ordered collection for the dropdown, most-recently-created first.
    pub fn notifications(&self) -> &[NotificationRecord] {
        &self.notifications
    }
}

/// Dropdown visibility.
impl NotificationStore {
    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn open_dropdown(&mut self) {
        self.dropdown_open = true;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }
}
