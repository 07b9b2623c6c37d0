pub mod adapter;
pub mod error;
pub mod store;
pub mod types;

pub use adapter::{DocumentSource, NoDocuments, SSID_PREFIX, fax_record};
pub use error::{Error, Result};
pub use store::{DashboardEvent, NotificationStore};
pub use types::{
    AppConfig, ConfigError, DemoConfig, FaxArrival, FaxRecord, GeneralConfig, NotificationId,
    NotificationRecord, PageCount, PageCountError,
};
