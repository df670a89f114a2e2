//! Wire-format DTOs for the Gemini `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

//
// ─── REQUEST ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentPayload {
    pub contents: Vec<ContentPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfigPayload>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentPayload {
    pub parts: Vec<PartPayload>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartPayload {
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfigPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfigPayload>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfigPayload {
    pub aspect_ratio: String,
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    pub data: String,
}

/// Error envelope the API returns on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

impl GenerateContentResponse {
    /// The first text part across all candidates, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.parts().find_map(|part| part.text.as_deref())
    }

    /// The first inline image payload across all candidates, if any.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.parts().find_map(|part| part.inline_data.as_ref())
    }

    fn parts(&self) -> impl Iterator<Item = &CandidatePart> {
        self.candidates
            .iter()
            .filter_map(|candidate| candidate.content.as_ref())
            .filter_map(|content| content.parts.as_ref())
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_text_part() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"ok\":true}"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("{\"ok\":true}"));
        assert!(response.first_inline_data().is_none());
    }

    #[test]
    fn extracts_inline_image_part() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [
                    {"text": "caption"},
                    {"inlineData": {"mimeType": "image/png", "data": "aGk="}}
                ]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let inline = response.first_inline_data().unwrap();
        assert_eq!(inline.mime_type.as_deref(), Some("image/png"));
        assert_eq!(inline.data, "aGk=");
    }

    #[test]
    fn empty_response_has_no_parts() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
        assert!(response.first_inline_data().is_none());
    }
}
