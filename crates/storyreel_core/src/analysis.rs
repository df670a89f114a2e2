//! Structured analysis returned by the text model.

use crate::Headline;
use serde::{Deserialize, Serialize};

/// One character profile inside an [`Analysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    /// Character name in the user-facing language
    pub name: String,
    /// Character description in the user-facing language
    pub description: String,
    /// English solo-portrait prompt
    pub image_prompt: String,
}

/// One scene draft inside an [`Analysis`] (climax or chapter cut).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDraft {
    /// Scene title in the user-facing language
    pub title: String,
    /// Scene summary in the user-facing language
    pub summary: String,
    /// Script excerpt this scene covers
    pub script_segment: String,
    /// English visual prompt
    pub image_prompt: String,
}

/// The structured output of the script-analysis call.
///
/// Transient: consumed once to populate the entity store, then discarded.
/// The wire format is camelCase because the response schema sent to the
/// text model names the fields that way; deserialization doubles as the
/// schema-shape validation the gateway contract requires: a payload
/// missing any required field fails to parse.
///
/// The field-language contract (English `imagePrompt` fields, user-facing
/// language everywhere else) is enforced in the prompt, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Two-line hooking headline
    pub headline: Headline,
    /// Free-text guide keeping character appearance consistent across renders
    pub visual_style_guide: String,
    /// The 2-3 principal characters
    pub characters: Vec<CharacterProfile>,
    /// The single most intense scene
    pub climax: SceneDraft,
    /// The chapter cuts, in story order
    pub chapters: Vec<SceneDraft>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_wire_shape() {
        let json = r#"{
            "headline": {"line1": "첫 줄", "line2": "둘째 줄"},
            "visualStyleGuide": "톤 가이드",
            "characters": [
                {"name": "지우", "description": "주인공", "imagePrompt": "A young woman"}
            ],
            "climax": {"title": "결전", "summary": "요약", "scriptSegment": "대사", "imagePrompt": "A rooftop duel"},
            "chapters": [
                {"title": "시작", "summary": "요약", "scriptSegment": "대사", "imagePrompt": "A quiet street"}
            ]
        }"#;
        let analysis: Analysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.characters.len(), 1);
        assert_eq!(analysis.chapters.len(), 1);
        assert_eq!(analysis.climax.image_prompt, "A rooftop duel");
    }

    #[test]
    fn missing_required_field_fails_to_parse() {
        // no climax
        let json = r#"{
            "headline": {"line1": "a", "line2": "b"},
            "visualStyleGuide": "g",
            "characters": [],
            "chapters": []
        }"#;
        assert!(serde_json::from_str::<Analysis>(json).is_err());
    }
}
