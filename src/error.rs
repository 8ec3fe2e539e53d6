//! Error types shared by the REST client and the pages that consume it.
//!
//! ERROR HANDLING
//! ==============
//! A 404 is routed globally to the not-found view; every other failure is
//! rendered by the calling page as a danger message. Nothing here is fatal to
//! the running application.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a backend API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered `404 Not Found`.
    #[error("not found")]
    NotFound,
    /// The backend answered with a non-success status other than 404.
    #[error("request failed: {status}")]
    Status { status: u16, body: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected payload.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text shown in a page's danger message for this failure.
    ///
    /// The backend reports failures as a raw text body or a JSON string; both
    /// are shown as-is. Empty bodies fall back to the status line.
    pub fn danger_message(&self) -> String {
        match self {
            Self::Status { body, .. } => {
                let body = body.trim();
                if body.is_empty() {
                    return self.to_string();
                }
                match serde_json::from_str::<String>(body) {
                    Ok(text) => text,
                    Err(_) => body.to_owned(),
                }
            }
            other => other.to_string(),
        }
    }
}
