//! Orchestration state machine for the Storyreel storyboard engine.
//!
//! The pipeline drives the end-to-end flow: submit script, await analysis,
//! render character portraits in roster order, gate on user confirmation,
//! render the climax, then serve on-demand scene and portrait regeneration.
//! The global phase is deliberately separate from per-entity render status:
//! one slow or failed image never blocks the rest of the batch, while the
//! one truly sequential dependency (confirming character likeness before
//! spending renders on scenes that reference the style guide) stays gated.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod phase;
mod pipeline;

pub use phase::Phase;
pub use pipeline::StoryboardPipeline;
