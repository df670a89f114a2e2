//! Session aggregate: the unit of save/load.

use crate::{AspectRatio, Character, Era, Headline, ImageStyle, Scene};
use serde::{Deserialize, Serialize};

/// Everything a storyboard session consists of: the inputs, the generation
/// settings, and the populated entity collections.
///
/// The pipeline controller works on this aggregate by reference and the
/// project codec reads/writes it directly; nothing else holds a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The submitted drama script, verbatim
    pub script_text: String,
    /// Number of chapter cuts requested
    pub chapter_count: u32,
    /// Selected visual style
    pub style: ImageStyle,
    /// Selected era
    pub era: Era,
    /// Selected aspect ratio
    pub aspect_ratio: AspectRatio,
    /// All scenes: the climax first, then chapters in story order
    pub scenes: Vec<Scene>,
    /// The character roster in analysis order
    pub characters: Vec<Character>,
    /// Hooking headline, present once analysis has run
    pub headline: Option<Headline>,
    /// Style guide text kept identical across renders
    pub style_guide: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            script_text: String::new(),
            chapter_count: 6,
            style: ImageStyle::default(),
            era: Era::default(),
            aspect_ratio: AspectRatio::default(),
            scenes: Vec::new(),
            characters: Vec::new(),
            headline: None,
            style_guide: String::new(),
        }
    }
}
