pub(crate) mod config;
pub use config::{AppConfig, ConfigError, DemoConfig, GeneralConfig};

pub(crate) mod fax;
pub use fax::{FaxArrival, FaxRecord};

pub(crate) mod notification;
pub use notification::{NotificationId, NotificationRecord};

pub(crate) mod page_count;
pub use page_count::{PageCount, PageCountError};
