use crate::types::{FaxArrival, NotificationId};

/// Discrete inputs the dashboard core reacts to, dispatched through
/// [`NotificationStore::apply`](crate::store::NotificationStore::apply).
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The delivery boundary reported a new incoming fax.
    NewFaxArrived(FaxArrival),
    /// The user clicked a notification in the dropdown.
    NotificationSelected(NotificationId),
    /// The user clicked "Mark all as read".
    MarkAllRead,
    /// The inbox view acknowledged the handed-over selection.
    SelectionConsumed,
}
