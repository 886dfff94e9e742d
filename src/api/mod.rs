//! Gemini API client and wire types.

mod client;
mod types;

pub use client::GeminiClient;
pub use types::{ApiErrorBody, ErrorEnvelope, GenerateResponse};
