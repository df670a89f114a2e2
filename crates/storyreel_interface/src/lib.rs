//! Trait definitions for the Storyreel storyboard engine.
//!
//! The pipeline is generic over these traits; provider implementations
//! live in `storyreel_models`, and tests substitute scripted mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageRenderer, ScriptAnalyzer};
