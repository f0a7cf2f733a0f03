use thiserror::Error;

/// Failure categories for remote operations.
///
/// `Connectivity`, `Unauthorized`, `Forbidden` and `NotFound` are reported to
/// the user once, centrally, by the transport layer. `Validation` and
/// `Unknown` are left for the calling operation to report with a message of
/// its own choosing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("connection error: {0}")]
    Connectivity(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {}", message.as_deref().unwrap_or("invalid data"))]
    Validation { message: Option<String> },

    #[error("api error ({status}): {message}")]
    Unknown { status: u16, message: String },
}

impl ApiError {
    /// Map an HTTP status and extracted body message to an error category.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            400 | 422 => Self::Validation {
                message: (!message.is_empty()).then_some(message),
            },
            _ => Self::Unknown { status, message },
        }
    }

    /// Whether the transport layer has already reported this failure to the
    /// user. Callers must not notify again for these categories.
    pub fn handled_centrally(&self) -> bool {
        matches!(
            self,
            Self::Connectivity(_) | Self::Unauthorized(_) | Self::Forbidden(_) | Self::NotFound(_)
        )
    }

    /// The structured message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Validation { message } => message.as_deref(),
            _ => None,
        }
    }
}
