//! Global pipeline phase.

use serde::{Deserialize, Serialize};

/// Which stage of the generation flow the pipeline is in.
///
/// Distinct from per-entity render status: an entity can be mid-retry while
/// the pipeline sits at a stable phase. `Errored` is reachable from
/// `Analyzing` only; per-entity render failures are recorded in the entity
/// store and never escalate here.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Waiting for a script
    #[default]
    Idle,
    /// Analysis request in flight
    Analyzing,
    /// Sequential character portrait batch running
    CharacterGenerating,
    /// Roster rendered; waiting for the user to confirm likenesses
    CharacterConfirm,
    /// Climax render in flight
    ImageGenerating,
    /// Storyboard ready; scenes render on demand
    Complete,
    /// Analysis failed; resubmission required
    Errored,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn displays_snake_case() {
        assert_eq!(Phase::CharacterConfirm.to_string(), "character_confirm");
        assert_eq!(Phase::from_str("image_generating").unwrap(), Phase::ImageGenerating);
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }
}
