//! Storyreel - drama-script storyboard generator.
//!
//! Storyreel turns a pasted drama script into a storyboard: a text model
//! analyzes the script into a hooking headline, a character roster, a
//! climax scene and N chapter cuts, then an image model renders a portrait
//! per character and an illustration per scene, each with independent
//! loading/error/retry state. Whole sessions save and restore as portable
//! JSON snapshots.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storyreel::{GeminiStoryboard, Phase, StoryboardPipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = GeminiStoryboard::with_resolved_credential()?;
//!     let mut pipeline = StoryboardPipeline::new(gateway);
//!     pipeline.submit("민수: 도망칠 곳은 없어.").await?;
//!     assert_eq!(pipeline.phase(), Phase::CharacterConfirm);
//!     pipeline.start_storyboard().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Storyreel is organized as a workspace with focused crates:
//!
//! - `storyreel_core` - Core data types (entities, styles, session)
//! - `storyreel_interface` - `ScriptAnalyzer`/`ImageRenderer` traits
//! - `storyreel_error` - Error types
//! - `storyreel_models` - Gemini gateway implementation
//! - `storyreel_store` - Per-id entity store
//! - `storyreel_pipeline` - Orchestration state machine
//! - `storyreel_project` - Project snapshot codec
//!
//! This crate (`storyreel`) re-exports everything for convenience.

// Re-export the workspace crates
pub use storyreel_core::*;
pub use storyreel_error::*;
pub use storyreel_interface::*;
pub use storyreel_models::*;
pub use storyreel_pipeline::*;
pub use storyreel_project::*;
pub use storyreel_store::*;
