//! Snapshot serialization and defensive deserialization.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use storyreel_core::{
    AspectRatio, Character, Era, Headline, ImageStyle, RenderState, Scene, Session,
};
use storyreel_error::{JsonError, ProjectError, ProjectErrorKind, StoryreelResult};
use tracing::debug;

#[derive(Serialize)]
struct SnapshotDocument<'a> {
    created_at: DateTime<Utc>,
    #[serde(flatten)]
    session: &'a Session,
}

/// Serialize a session to a pretty-printed snapshot document.
///
/// The document carries every [`Session`] field plus a `created_at`
/// timestamp.
pub fn to_snapshot(session: &Session) -> StoryreelResult<String> {
    let document = SnapshotDocument {
        created_at: Utc::now(),
        session,
    };
    serde_json::to_string_pretty(&document)
        .map_err(|e| JsonError::new(format!("Failed to serialize snapshot: {}", e)).into())
}

/// Restore a session from a snapshot document.
///
/// Fails with `CorruptProject` only when the document is not valid JSON at
/// all. Every field is extracted defensively: missing `chapter_count`
/// defaults to 6, missing `style` to cinematic, missing `aspect_ratio` to
/// 16:9, missing `era` to modern, missing collections to empty; malformed
/// entity records are skipped and extra fields ignored. Entities restored
/// mid-render come back idle, since an in-flight request cannot survive a
/// restore.
pub fn from_snapshot(text: &str) -> Result<Session, ProjectError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ProjectError::new(ProjectErrorKind::CorruptProject(e.to_string())))?;

    let defaults = Session::default();
    let session = Session {
        script_text: string_field(&value, "script_text"),
        chapter_count: value
            .get("chapter_count")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n >= 1)
            .unwrap_or(defaults.chapter_count),
        style: typed_field::<ImageStyle>(&value, "style").unwrap_or_default(),
        era: typed_field::<Era>(&value, "era").unwrap_or_default(),
        aspect_ratio: typed_field::<AspectRatio>(&value, "aspect_ratio").unwrap_or_default(),
        scenes: entity_list::<Scene>(&value, "scenes")
            .into_iter()
            .map(|mut scene| {
                scene.render = settle(scene.render);
                scene
            })
            .collect(),
        characters: entity_list::<Character>(&value, "characters")
            .into_iter()
            .map(|mut character| {
                character.render = settle(character.render);
                character
            })
            .collect(),
        headline: typed_field::<Headline>(&value, "headline"),
        style_guide: string_field(&value, "style_guide"),
    };

    debug!(
        scenes = session.scenes.len(),
        characters = session.characters.len(),
        "Restored session from snapshot"
    );
    Ok(session)
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn typed_field<T: serde::de::DeserializeOwned>(value: &Value, key: &str) -> Option<T> {
    value
        .get(key)
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
}

fn entity_list<T: serde::de::DeserializeOwned>(value: &Value, key: &str) -> Vec<T> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// A snapshot can never resurrect an in-flight request.
fn settle(render: RenderState) -> RenderState {
    match render {
        RenderState::Rendering => RenderState::Idle,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::ImageData;

    fn sample_session() -> Session {
        Session {
            script_text: "민수: 여기였어.".to_string(),
            chapter_count: 3,
            style: ImageStyle::WebtoonRomance,
            era: Era::Joseon,
            aspect_ratio: AspectRatio::Tall,
            scenes: vec![Scene {
                id: "climax".to_string(),
                chapter_number: None,
                title: "결전".to_string(),
                summary: "요약".to_string(),
                script_segment: Some("대사".to_string()),
                image_prompt: "a duel at dawn".to_string(),
                is_climax: true,
                render: RenderState::Ready(ImageData {
                    mime: Some("image/png".to_string()),
                    data: vec![1, 2, 3],
                }),
            }],
            characters: vec![Character {
                id: "char-0".to_string(),
                name: "지연".to_string(),
                description: "주인공".to_string(),
                image_prompt: "a stern woman".to_string(),
                render: RenderState::Failed("quota".to_string()),
            }],
            headline: Some(Headline {
                line1: "첫 줄".to_string(),
                line2: "둘째 줄".to_string(),
            }),
            style_guide: "warm light".to_string(),
        }
    }

    #[test]
    fn round_trip_reproduces_every_field() -> anyhow::Result<()> {
        let session = sample_session();
        let snapshot = to_snapshot(&session)?;
        assert!(snapshot.contains("created_at"));

        let restored = from_snapshot(&snapshot).unwrap();
        assert_eq!(restored, session);
        Ok(())
    }

    #[test]
    fn empty_document_loads_with_defaults() {
        let session = from_snapshot("{}").unwrap();
        assert_eq!(session, Session::default());
        assert_eq!(session.chapter_count, 6);
        assert_eq!(session.style, ImageStyle::Cinematic);
        assert_eq!(session.aspect_ratio, AspectRatio::Wide);
        assert!(session.scenes.is_empty());
    }

    #[test]
    fn missing_aspect_ratio_defaults_to_wide() -> anyhow::Result<()> {
        let snapshot = to_snapshot(&sample_session())?;
        let mut value: Value = serde_json::from_str(&snapshot)?;
        value.as_object_mut().unwrap().remove("aspect_ratio");

        let session = from_snapshot(&value.to_string()).unwrap();
        assert_eq!(session.aspect_ratio, AspectRatio::Wide);
        // everything else untouched
        assert_eq!(session.scenes, sample_session().scenes);
        Ok(())
    }

    #[test]
    fn zero_chapter_count_falls_back_to_default() {
        let session = from_snapshot(r#"{"chapter_count": 0}"#).unwrap();
        assert_eq!(session.chapter_count, 6);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let session =
            from_snapshot(r#"{"script_text": "대본", "someday": "maybe"}"#).unwrap();
        assert_eq!(session.script_text, "대본");
    }

    #[test]
    fn malformed_entity_records_are_skipped() {
        let json = r#"{
            "characters": [
                {"id": "char-0", "name": "a", "description": "b", "image_prompt": "c"},
                {"this is": "not a character"},
                42
            ]
        }"#;
        let session = from_snapshot(json).unwrap();
        assert_eq!(session.characters.len(), 1);
        assert_eq!(session.characters[0].id, "char-0");
    }

    #[test]
    fn in_flight_renders_settle_to_idle() {
        let json = r#"{
            "characters": [
                {"id": "char-0", "name": "a", "description": "b", "image_prompt": "c",
                 "render": {"status": "rendering"}}
            ]
        }"#;
        let session = from_snapshot(json).unwrap();
        assert_eq!(session.characters[0].render, RenderState::Idle);
    }

    #[test]
    fn non_json_input_is_corrupt() {
        let error = from_snapshot("definitely not json").unwrap_err();
        assert!(error.to_string().contains("Corrupt project"));
    }
}
