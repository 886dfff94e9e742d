//! Gemini API HTTP client: key validation and text generation.

use reqwest::Client;

use crate::api::types::{ApiErrorBody, ErrorEnvelope, GenerateResponse};
use crate::error::{CinematicError, Result};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1/models";
const MODEL: &str = "gemini-2.5-pro";

/// Client bound to one API key for the session.
pub struct GeminiClient {
    api_key: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Result<Self> {
        let client = Client::builder().user_agent("cinematic/0.1").build()?;
        Ok(Self {
            api_key: api_key.trim().to_string(),
            client,
        })
    }

    fn generate_url(&self) -> String {
        format!("{API_BASE}/{MODEL}:generateContent?key={}", self.api_key)
    }

    /// Confirm the key is usable with one minimal generate call.
    /// Exactly one attempt; classification of failures is in `classify_error`.
    pub async fn validate_key(&self) -> Result<()> {
        let response = self
            .client
            .post(self.generate_url())
            .json(&request_body("Hello"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let envelope: ErrorEnvelope = response.json().await.unwrap_or_default();
            return Err(classify_error(envelope.error));
        }

        let body: GenerateResponse = response.json().await?;
        if body.candidates.is_empty() {
            return Err(CinematicError::MalformedResponse);
        }
        Ok(())
    }

    /// Send one prompt and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post(self.generate_url())
            .json(&request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let envelope: ErrorEnvelope = response.json().await.unwrap_or_default();
            return Err(classify_error(envelope.error));
        }

        let body: GenerateResponse = response.json().await?;
        body.into_text().ok_or(CinematicError::MalformedResponse)
    }
}

/// Request body for a single-turn generate call.
fn request_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "parts": [{
                "text": text
            }]
        }]
    })
}

/// Map the API's error envelope onto the credential error taxonomy.
fn classify_error(error: Option<ApiErrorBody>) -> CinematicError {
    match error {
        Some(e) if e.status == "INVALID_ARGUMENT" => CinematicError::KeyInvalidFormat,
        Some(e) if e.status == "PERMISSION_DENIED" => CinematicError::KeyPermissionDenied,
        Some(e) if e.code == 429 => CinematicError::QuotaExceeded,
        Some(e) if !e.message.is_empty() => CinematicError::Api(e.message),
        Some(_) => CinematicError::Api("Unknown error".into()),
        None => CinematicError::Api("Failed to validate API key".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_and_trims_key() {
        let c = GeminiClient::new("  abc123  ").unwrap();
        assert!(c.generate_url().ends_with("generateContent?key=abc123"));
        assert!(c.generate_url().starts_with(API_BASE));
    }

    #[test]
    fn request_body_nests_text_under_contents_parts() {
        let body = request_body("Hello");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"].as_str(),
            Some("Hello")
        );
    }

    #[test]
    fn invalid_argument_classifies_as_bad_key_format() {
        let e = classify_error(Some(ApiErrorBody {
            code: 400,
            message: "API key not valid".into(),
            status: "INVALID_ARGUMENT".into(),
        }));
        assert!(matches!(e, CinematicError::KeyInvalidFormat));
    }

    #[test]
    fn permission_denied_classifies_distinctly() {
        let e = classify_error(Some(ApiErrorBody {
            code: 403,
            message: "forbidden".into(),
            status: "PERMISSION_DENIED".into(),
        }));
        assert!(matches!(e, CinematicError::KeyPermissionDenied));
    }

    #[test]
    fn code_429_classifies_as_quota() {
        let e = classify_error(Some(ApiErrorBody {
            code: 429,
            message: "Resource exhausted".into(),
            status: "RESOURCE_EXHAUSTED".into(),
        }));
        assert!(matches!(e, CinematicError::QuotaExceeded));
    }

    #[test]
    fn other_envelope_surfaces_its_message() {
        let e = classify_error(Some(ApiErrorBody {
            code: 500,
            message: "backend hiccup".into(),
            status: "INTERNAL".into(),
        }));
        assert_eq!(e.to_string(), "Error: backend hiccup");
    }

    #[test]
    fn missing_envelope_gets_generic_message() {
        let e = classify_error(None);
        assert_eq!(e.to_string(), "Error: Failed to validate API key");
    }
}
