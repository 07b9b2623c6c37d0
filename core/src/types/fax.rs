use serde::{Deserialize, Serialize};

use crate::types::config::DemoConfig;
use crate::types::notification::NotificationId;
use crate::types::page_count::PageCount;

/// Ingestion payload for one arriving fax, supplied by the delivery
/// boundary. The store no longer fabricates sender/recipient data; callers
/// without a real ingestion pipeline use [`FaxArrival::demo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaxArrival {
    pub from_number: String,
    pub to_number: String,
    pub user_inbox: String,
    pub pages: PageCount,
    pub preview_url: String,
}

impl FaxArrival {
    /// Demo-mode synthesis: placeholder identity from config, page count as
    /// reported by the caller.
    pub fn demo(pages: PageCount, demo: &DemoConfig) -> Self {
        Self {
            from_number: demo.from_number.clone(),
            to_number: demo.to_number.clone(),
            user_inbox: demo.user_inbox.clone(),
            pages,
            preview_url: demo.preview_url.clone(),
        }
    }
}

/// External fax-record shape consumed by the inbox view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaxRecord {
    pub id: NotificationId,
    pub ssid: String,
    pub date: String,
    pub from_number: String,
    pub to_number: String,
    pub assigned_user: String,
    pub page_count: PageCount,
    pub preview_url: String,
    pub pdf_url: String,
}
