//! Scene entity.

use crate::RenderState;
use serde::{Deserialize, Serialize};

/// Fixed id of the single climax scene in a session.
pub const CLIMAX_ID: &str = "climax";

/// A storyboard scene: either the single climax or one numbered chapter.
///
/// Exactly one scene per session has `is_climax` set, with the fixed id
/// [`CLIMAX_ID`] and no chapter number. Chapter scenes carry ids
/// `chapter-0..chapter-(N-1)` with `chapter_number = index + 1`, contiguous
/// from 1 in array order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Stable identifier: `climax` or `chapter-<index>`
    pub id: String,
    /// 1-based chapter number; absent iff this is the climax
    #[serde(default)]
    pub chapter_number: Option<u32>,
    /// Scene title in the user-facing language
    pub title: String,
    /// Scene summary in the user-facing language
    pub summary: String,
    /// Script excerpt this scene covers
    #[serde(default)]
    pub script_segment: Option<String>,
    /// English visual prompt for the image model
    pub image_prompt: String,
    /// Whether this is the climax scene
    #[serde(default)]
    pub is_climax: bool,
    /// Illustration render status
    #[serde(default)]
    pub render: RenderState,
}

impl Scene {
    /// The stable id for chapter position `index` (0-based).
    pub fn chapter_id(index: usize) -> String {
        format!("chapter-{index}")
    }
}
