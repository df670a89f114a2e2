//! Gemini gateway implementation for the Storyreel storyboard engine.
//!
//! This crate implements the [`storyreel_interface`] traits against the
//! Google Gemini REST API: one text model turns a drama script into a
//! structured storyboard analysis, one image model renders character
//! portraits and scene illustrations. The crate owns prompt templating,
//! the analysis response schema, wire-format DTOs, and ordered credential
//! resolution.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
pub mod gemini;

pub use credentials::{ApiCredential, CredentialSource, GatewaySettings};
pub use gemini::GeminiStoryboard;
