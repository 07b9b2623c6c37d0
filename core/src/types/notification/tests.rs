use super::*;
use std::time::Duration;

fn arrival() -> FaxArrival {
    FaxArrival {
        from_number: "+15551230001".to_string(),
        to_number: "+15551230002".to_string(),
        user_inbox: "Front Desk".to_string(),
        pages: PageCount::try_from(2).unwrap(),
        preview_url: "https://faxes.test/preview.jpg".to_string(),
    }
}

#[test]
fn id_sequence_disambiguates_same_instant() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_000);
    let a = NotificationId::generate(now, 0);
    let b = NotificationId::generate(now, 1);
    assert_ne!(a, b);
}

#[test]
fn id_display_matches_as_str() {
    let id = NotificationId::from("42");
    assert_eq!(id.to_string(), id.as_str());
}

#[test]
fn record_starts_unread() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let record = NotificationRecord::from_arrival(NotificationId::generate(now, 0), arrival(), now);
    assert!(!record.read);
    assert_eq!(record.from_number, "+15551230001");
    assert_eq!(record.pages.into_inner(), 2);
}

#[test]
fn record_timestamp_is_human_readable() {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let record = NotificationRecord::from_arrival(NotificationId::generate(now, 0), arrival(), now);
    // Local-time formatting; only the shape is stable across timezones.
    assert_eq!(record.timestamp.len(), "2023-11-14 22:13:20".len());
}
