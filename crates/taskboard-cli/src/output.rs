use serde::Serialize;
use taskboard_core::{NotificationLevel, Notify};

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

pub fn output_success<T: Serialize>(data: T) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&response).unwrap());
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    let list = ListResponse { items, count };
    output_success(list);
}

/// Renders the transient notifications the state layer emits. In a terminal
/// they go to stderr so piped JSON output stays clean.
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Error => eprintln!("error: {message}"),
            NotificationLevel::Warning => eprintln!("warning: {message}"),
            NotificationLevel::Success | NotificationLevel::Info => eprintln!("{message}"),
        }
    }
}

/// The CLI has no login screen to land on; it points at the login command
/// instead.
pub struct LoginHintNavigator;

impl taskboard_core::Navigator for LoginHintNavigator {
    fn redirect_to_login(&self) {
        eprintln!("Run `taskboard login` to start a new session.");
    }
}
