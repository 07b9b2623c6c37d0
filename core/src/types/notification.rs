use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

use crate::types::fax::FaxArrival;
use crate::types::page_count::PageCount;

/// Opaque token identifying one notification, stable for the record's
/// lifetime. Uniqueness within a store is guaranteed by the sequence
/// component; the millisecond component alone can collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(String);

impl NotificationId {
    pub(crate) fn generate(now: SystemTime, seq: u64) -> Self {
        let millis = now
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        Self(format!("{millis}-{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NotificationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NotificationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One incoming-fax notification as shown in the bell dropdown.
///
/// Records live for the process lifetime: they are created on arrival, the
/// `read` flag flips false→true exactly once, and nothing ever removes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: NotificationId,
    pub from_number: String,
    pub to_number: String,
    pub user_inbox: String,
    pub pages: PageCount,
    pub timestamp: String,
    pub read: bool,
    pub preview_url: String,
}

impl NotificationRecord {
    pub(crate) fn from_arrival(id: NotificationId, arrival: FaxArrival, now: SystemTime) -> Self {
        Self {
            id,
            from_number: arrival.from_number,
            to_number: arrival.to_number,
            user_inbox: arrival.user_inbox,
            pages: arrival.pages,
            timestamp: format_timestamp(now),
            read: false,
            preview_url: arrival.preview_url,
        }
    }
}

fn format_timestamp(now: SystemTime) -> String {
    DateTime::<Local>::from(now)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests;
