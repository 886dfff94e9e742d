//! Application error type.
//!
//! `Display` strings double as the user-facing messages rendered inline on
//! the key-entry screen, so the wording here is what the user reads.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CinematicError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API key format")]
    KeyInvalidFormat,

    #[error("API key is invalid or lacks permission")]
    KeyPermissionDenied,

    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("Error: {0}")]
    Api(String),

    #[error("Unexpected response from API")]
    MalformedResponse,
}

pub type Result<T> = std::result::Result<T, CinematicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_errors_render_distinct_messages() {
        let messages = [
            CinematicError::KeyInvalidFormat.to_string(),
            CinematicError::KeyPermissionDenied.to_string(),
            CinematicError::QuotaExceeded.to_string(),
            CinematicError::Api("something broke".into()).to_string(),
        ];
        for (i, m) in messages.iter().enumerate() {
            for other in &messages[i + 1..] {
                assert_ne!(m, other);
            }
        }
    }

    #[test]
    fn other_error_keeps_api_message_verbatim() {
        let e = CinematicError::Api("model overloaded".into());
        assert_eq!(e.to_string(), "Error: model overloaded");
    }
}
