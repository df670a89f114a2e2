//! Hooking headline attached to the climax scene.

use serde::{Deserialize, Serialize};

/// Two-line hooking headline produced by analysis.
///
/// Exists only when a climax scene exists; display-only, attached to the
/// climax for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    /// First headline line
    pub line1: String,
    /// Second headline line
    pub line2: String,
}
