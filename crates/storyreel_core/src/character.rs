//! Character entity.

use crate::RenderState;
use serde::{Deserialize, Serialize};

/// A principal character extracted from the script.
///
/// Identity is assigned at creation from analysis order (`char-0`,
/// `char-1`, ...) and never reused. The entity store owns every character;
/// mutation happens only through its per-id operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Stable identifier, `char-<index>` in roster order
    pub id: String,
    /// Character name in the user-facing language
    pub name: String,
    /// Character description in the user-facing language
    pub description: String,
    /// English solo-portrait prompt for the image model
    pub image_prompt: String,
    /// Portrait render status
    #[serde(default)]
    pub render: RenderState,
}

impl Character {
    /// The stable id for roster position `index`.
    pub fn id_for(index: usize) -> String {
        format!("char-{index}")
    }
}
