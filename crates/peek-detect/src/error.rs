use std::fmt;

#[derive(Debug)]
pub enum DetectError {
    /// Connection refused, DNS failure, timeout and the like.
    Transport(String),
    /// The endpoint answered with a non-success status.
    Status { code: u16, body: String },
    /// Reading the response body failed.
    Body(std::io::Error),
    /// The body was not the JSON we expect.
    Json(serde_json::Error),
    /// The blocking request task was cancelled or panicked.
    Task(String),
}

impl fmt::Display for DetectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectError::Transport(msg) => write!(f, "transport error: {msg}"),
            DetectError::Status { code, body } => write!(f, "HTTP {code}: {body}"),
            DetectError::Body(err) => write!(f, "failed to read body: {err}"),
            DetectError::Json(err) => write!(f, "invalid JSON: {err}"),
            DetectError::Task(msg) => write!(f, "request task failed: {msg}"),
        }
    }
}

impl std::error::Error for DetectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectError::Body(err) => Some(err),
            DetectError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DetectError {
    fn from(err: serde_json::Error) -> Self {
        DetectError::Json(err)
    }
}

impl From<std::io::Error> for DetectError {
    fn from(err: std::io::Error) -> Self {
        DetectError::Body(err)
    }
}

impl From<tokio::task::JoinError> for DetectError {
    fn from(err: tokio::task::JoinError) -> Self {
        DetectError::Task(err.to_string())
    }
}

impl From<ureq::Error> for DetectError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => DetectError::Status {
                code,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => DetectError::Transport(transport.to_string()),
        }
    }
}
