pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No response, or a body that failed to decode
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("HTTP {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("invalid page origin {origin:?}: {message}")]
    InvalidOrigin { origin: String, message: String },
}

impl Error {
    /// Text for the status line.
    ///
    /// A service detail wins; otherwise `"{fallback} ({status})"` for HTTP errors and
    /// the bare fallback when no response was received.
    pub fn status_message(&self, fallback: &str) -> String {
        match self {
            Error::Status { detail: Some(detail), .. } => detail.clone(),
            Error::Status { status, detail: None } => format!("{} ({})", fallback, status),
            Error::Reqwest(_) | Error::InvalidOrigin { .. } => fallback.to_string(),
        }
    }
}
