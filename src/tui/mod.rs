//! TUI views and rendering.

mod views;

pub use views::{
    draw_intro, draw_key_entry, draw_loading, draw_question, draw_result, progress_label,
    APP_TITLE,
};
