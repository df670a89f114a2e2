//! Google Gemini gateway.
//!
//! Talks to the `generativelanguage.googleapis.com` REST API directly:
//! structured JSON output (`responseSchema`) for script analysis and the
//! image model's `imageConfig` for aspect-ratio control, neither of which
//! the SDK wrappers expose.

mod client;
mod dto;
pub mod prompt;
mod schema;

pub use client::{ANALYSIS_MODEL, GeminiStoryboard, RENDER_MODEL};
pub use schema::analysis_response_schema;
