//! Gemini API wire types (the subset this app reads).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Pull out the generated text at `candidates[0].content.parts[0].text`.
    pub fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorEnvelope {
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_response_text_path() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"MOVIE: Up (2009)"}]}}]}"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_text().as_deref(), Some("MOVIE: Up (2009)"));
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let resp: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.into_text().is_none());
    }

    #[test]
    fn error_envelope_parses_status_and_code() {
        let json = r#"{"error":{"code":429,"message":"Resource exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        let env: ErrorEnvelope = serde_json::from_str(json).unwrap();
        let body = env.error.unwrap();
        assert_eq!(body.code, 429);
        assert_eq!(body.status, "RESOURCE_EXHAUSTED");
    }
}
