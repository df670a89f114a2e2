//! Core data types for the Storyreel storyboard engine.
//!
//! This crate provides the foundation data types used across the Storyreel
//! workspace: the entity model (characters, scenes, headline), the
//! user-selectable generation tags (style, era, aspect ratio), the analysis
//! result returned by the text model, the gateway request types, and the
//! session aggregate that save/load operates on.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod character;
mod headline;
mod image;
mod render;
mod request;
mod scene;
mod session;
mod style;

pub use analysis::{Analysis, CharacterProfile, SceneDraft};
pub use character::Character;
pub use headline::Headline;
pub use image::ImageData;
pub use render::RenderState;
pub use request::{
    AnalyzeRequest, AnalyzeRequestBuilder, RenderRequest, RenderRequestBuilder,
};
pub use scene::{CLIMAX_ID, Scene};
pub use session::Session;
pub use style::{AspectRatio, Era, ImageStyle};
