//! Per-entity render status.

use crate::ImageData;
use serde::{Deserialize, Serialize};

/// Render status of a single character or scene.
///
/// Modeling the status as one enum makes the store invariant structural: an
/// entity can hold an image, be mid-render, or carry an error, never more
/// than one at a time. Entering [`RenderState::Rendering`] therefore
/// discards any prior image or error; a failed regeneration ends in
/// [`RenderState::Failed`] with no stale image retained.
///
/// Transitions: `Idle -> Rendering -> {Ready | Failed}`, plus
/// `Failed -> Rendering` on retry and `Ready -> Rendering` on regenerate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RenderState {
    /// No render attempted yet
    #[default]
    Idle,
    /// A render request is in flight
    Rendering,
    /// The last render succeeded
    Ready(ImageData),
    /// The last render failed with a human-readable message
    Failed(String),
}

impl RenderState {
    /// Whether a render request is currently in flight.
    pub fn is_rendering(&self) -> bool {
        matches!(self, RenderState::Rendering)
    }

    /// Whether the entity holds a rendered image.
    pub fn is_ready(&self) -> bool {
        matches!(self, RenderState::Ready(_))
    }

    /// The rendered image, if any.
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            RenderState::Ready(image) => Some(image),
            _ => None,
        }
    }

    /// The error message from the last failed render, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RenderState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
