//! Response schema for the structured analysis call.

use serde_json::{Value, json};

/// The `responseSchema` sent with every analysis request.
///
/// Mirrors [`storyreel_core::Analysis`] field for field; every property is
/// required so a conforming response always deserializes. The field
/// descriptions restate the language contract where it matters most.
pub fn analysis_response_schema() -> Value {
    let scene_draft = json!({
        "type": "OBJECT",
        "properties": {
            "title": {"type": "STRING", "description": "Scene title, in Korean."},
            "summary": {"type": "STRING", "description": "Scene summary, in Korean."},
            "scriptSegment": {"type": "STRING", "description": "Script excerpt, in Korean."},
            "imagePrompt": {"type": "STRING", "description": "Detailed English visual prompt."}
        },
        "required": ["title", "summary", "scriptSegment", "imagePrompt"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "headline": {
                "type": "OBJECT",
                "properties": {
                    "line1": {"type": "STRING", "description": "First headline line, in Korean."},
                    "line2": {"type": "STRING", "description": "Second headline line, in Korean."}
                },
                "required": ["line1", "line2"]
            },
            "visualStyleGuide": {
                "type": "STRING",
                "description": "Korean guide for keeping character appearance consistent."
            },
            "characters": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": {"type": "STRING", "description": "Character name, in Korean."},
                        "description": {"type": "STRING", "description": "Character description, in Korean."},
                        "imagePrompt": {"type": "STRING", "description": "Detailed English prompt for a solo portrait."}
                    },
                    "required": ["name", "description", "imagePrompt"]
                }
            },
            "climax": scene_draft.clone(),
            "chapters": {
                "type": "ARRAY",
                "items": scene_draft
            }
        },
        "required": ["headline", "visualStyleGuide", "characters", "climax", "chapters"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_every_top_level_field() {
        let schema = analysis_response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            required,
            ["headline", "visualStyleGuide", "characters", "climax", "chapters"]
        );
    }

    #[test]
    fn scene_drafts_require_all_string_fields() {
        let schema = analysis_response_schema();
        for draft in [&schema["climax"], &schema["chapters"]["items"]] {
            let required = draft["required"].as_array().unwrap();
            assert_eq!(required.len(), 4);
        }
    }
}
