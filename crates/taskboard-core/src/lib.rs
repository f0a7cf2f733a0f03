pub mod config;
pub mod error;
pub mod nav;
pub mod notify;
pub mod result;

pub use config::AppConfig;
pub use error::ApiError;
pub use nav::{Navigator, NullNavigator};
pub use notify::{Notification, NotificationLevel, Notify, RecordingNotifier, TracingNotifier};
pub use result::ApiResult;
