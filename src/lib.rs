//! cinematic — guided movie recommendations in the terminal.

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_long_first_doc_paragraph
)]

pub mod api;
pub mod app;
pub mod error;
pub mod location;
pub mod parse;
pub mod prompt;
pub mod questions;
pub mod tui;
