//! Mapping from internal notifications to the inbox-facing fax record.

use crate::types::{FaxRecord, NotificationId, NotificationRecord};

/// Prefix of the secondary identifier shown by the inbox view.
pub const SSID_PREFIX: &str = "FAX";

/// Source of stored fax documents. Owned outside this crate; the adapter
/// only asks it for the document URL of a fax.
pub trait DocumentSource {
    fn document_url(&self, id: &NotificationId) -> Option<String>;
}

/// Document source for deployments without a backing document store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocuments;

impl DocumentSource for NoDocuments {
    fn document_url(&self, _id: &NotificationId) -> Option<String> {
        None
    }
}

/// Builds the external fax record for one notification.
///
/// Total and deterministic: the same notification and document source always
/// yield the same record. Callers with an empty selection pass `None` to the
/// inbox view instead of invoking this.
pub fn fax_record(
    notification: &NotificationRecord,
    documents: &impl DocumentSource,
) -> FaxRecord {
    FaxRecord {
        id: notification.id.clone(),
        ssid: format!("{SSID_PREFIX}{}", notification.id),
        date: notification.timestamp.clone(),
        from_number: notification.from_number.clone(),
        to_number: notification.to_number.clone(),
        assigned_user: notification.user_inbox.clone(),
        page_count: notification.pages,
        preview_url: notification.preview_url.clone(),
        pdf_url: documents.document_url(&notification.id).unwrap_or_default(),
    }
}
