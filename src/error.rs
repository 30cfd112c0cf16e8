use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Backend {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Text shown to the user for this failure.
    ///
    /// Backend messages and guard rejections are surfaced verbatim; everything
    /// else falls back to the call site's own message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Backend {
                message: Some(msg), ..
            } => msg.clone(),
            Error::Rejected(msg) => msg.clone(),
            Error::Validation(err) => err.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Backend { status, .. } => Some(*status),
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }
}
