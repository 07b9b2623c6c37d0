//! End-to-end dashboard workflow through the public API: arrivals, badge,
//! selection hand-over to the inbox view, and acknowledgement.

use std::time::{Duration, SystemTime};

use openfax_core::{
    DashboardEvent, DemoConfig, FaxArrival, NoDocuments, NotificationId, NotificationStore,
    PageCount, fax_record,
};

fn arrival() -> FaxArrival {
    FaxArrival {
        from_number: "+15551230001".to_string(),
        to_number: "+15551230002".to_string(),
        user_inbox: "Front Desk".to_string(),
        pages: PageCount::try_from(3).unwrap(),
        preview_url: "https://faxes.test/preview.jpg".to_string(),
    }
}

fn now() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
}

/// A single arrival produces one unread notification and a badge of 1.
#[test]
fn single_arrival_shows_on_the_badge() {
    let mut store = NotificationStore::new();
    store.apply(DashboardEvent::NewFaxArrived(arrival()), now());

    assert_eq!(store.notifications().len(), 1);
    assert!(!store.notifications()[0].read);
    assert_eq!(store.unread_count(), 1);
}

/// Opening the notification clears the badge and fills the selection slot.
#[test]
fn opening_a_notification_selects_and_marks_it_read() {
    let mut store = NotificationStore::new();
    store.apply(DashboardEvent::NewFaxArrived(arrival()), now());
    let id = store.notifications()[0].id.clone();

    store.apply(DashboardEvent::NotificationSelected(id.clone()), now());

    assert_eq!(store.unread_count(), 0);
    let selected = store.selected().expect("selection slot should be filled");
    assert_eq!(selected.id, id);
    assert!(selected.read);
}

/// "Mark all as read" flips three arrivals at once.
#[test]
fn mark_all_read_covers_every_notification() {
    let mut store = NotificationStore::new();
    for _ in 0..3 {
        store.apply(DashboardEvent::NewFaxArrived(arrival()), now());
    }

    store.apply(DashboardEvent::MarkAllRead, now());

    assert_eq!(store.unread_count(), 0);
    assert!(store.notifications().iter().all(|n| n.read));
}

/// Clicking a stale id changes nothing and raises nothing.
#[test]
fn unknown_notification_id_is_ignored() {
    let mut store = NotificationStore::new();
    store.apply(DashboardEvent::NewFaxArrived(arrival()), now());
    let before = store.notifications().to_vec();

    store.apply(
        DashboardEvent::NotificationSelected(NotificationId::from("nonexistent-id")),
        now(),
    );

    assert_eq!(store.notifications(), before.as_slice());
    assert!(store.selected().is_none());
}

/// Once the inbox view acknowledges the hand-over, the slot empties and the
/// adapter has nothing left to map.
#[test]
fn inbox_acknowledgement_clears_the_selection() {
    let mut store = NotificationStore::new();
    store.apply(DashboardEvent::NewFaxArrived(arrival()), now());
    let id = store.notifications()[0].id.clone();
    store.apply(DashboardEvent::NotificationSelected(id), now());
    assert!(store.selected().is_some());

    store.apply(DashboardEvent::SelectionConsumed, now());

    let handed_over = store.selected().map(|n| fax_record(n, &NoDocuments));
    assert!(handed_over.is_none());
}

/// The selected notification maps into the inbox-facing fax record with the
/// prefixed secondary identifier.
#[test]
fn selection_maps_into_a_fax_record() {
    let mut store = NotificationStore::new();
    store.apply(DashboardEvent::NewFaxArrived(arrival()), now());
    let id = store.notifications()[0].id.clone();
    store.apply(DashboardEvent::NotificationSelected(id.clone()), now());

    let selected = store.selected().unwrap();
    let fax = fax_record(selected, &NoDocuments);

    assert_eq!(fax.id, id);
    assert_eq!(fax.ssid, format!("FAX{id}"));
    assert_eq!(fax.date, selected.timestamp);
    assert_eq!(fax.from_number, selected.from_number);
    assert_eq!(fax.to_number, selected.to_number);
    assert_eq!(fax.assigned_user, selected.user_inbox);
    assert_eq!(fax.page_count, selected.pages);
    assert_eq!(fax.preview_url, selected.preview_url);
    assert_eq!(fax.pdf_url, "");
}

/// Demo-mode arrivals keep the page count the boundary reported; only the
/// identity fields come from config.
#[test]
fn demo_arrival_honors_the_reported_page_count() {
    let demo = DemoConfig::default();
    let mut store = NotificationStore::new();

    let pages = PageCount::try_from(5).unwrap();
    store.apply(
        DashboardEvent::NewFaxArrived(FaxArrival::demo(pages, &demo)),
        now(),
    );

    let record = &store.notifications()[0];
    assert_eq!(record.pages, pages);
    assert_eq!(record.from_number, demo.from_number);
    assert_eq!(record.user_inbox, demo.user_inbox);
}
