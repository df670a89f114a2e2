//! The session entity store.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyreel_core::{
    Analysis, CLIMAX_ID, Character, Headline, ImageData, RenderState, Scene,
};
use tracing::debug;

/// Entities whose render status the store manages by id.
trait Renderable {
    fn entity_id(&self) -> &str;
    fn render_mut(&mut self) -> &mut RenderState;
}

impl Renderable for Character {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn render_mut(&mut self) -> &mut RenderState {
        &mut self.render
    }
}

impl Renderable for Scene {
    fn entity_id(&self) -> &str {
        &self.id
    }

    fn render_mut(&mut self) -> &mut RenderState {
        &mut self.render
    }
}

/// Owns the roster of characters and scenes plus the headline and style
/// guide, keyed by stable identifiers.
///
/// Per-id operations target exactly one entity and silently skip an absent
/// id; they never panic and never touch siblings. Entities are created in
/// bulk when analysis completes and mutated in place afterwards; individual
/// deletion does not exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct EntityStore {
    /// Character roster in analysis order
    characters: Vec<Character>,
    /// Scenes: the climax first, then chapters in story order
    scenes: Vec<Scene>,
    /// Hooking headline, present once analysis has run
    headline: Option<Headline>,
    /// Style guide text kept identical across renders
    style_guide: String,
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the store from a fresh analysis, discarding everything.
    ///
    /// Characters receive ids `char-0..` in roster order and start in
    /// `Rendering` state, because the portrait batch begins immediately
    /// after analysis. The climax scene gets the fixed `climax` id; chapter
    /// scenes get `chapter-<index>` with 1-based contiguous numbering.
    pub fn populate(&mut self, analysis: Analysis) {
        let characters = analysis
            .characters
            .into_iter()
            .enumerate()
            .map(|(index, profile)| Character {
                id: Character::id_for(index),
                name: profile.name,
                description: profile.description,
                image_prompt: profile.image_prompt,
                render: RenderState::Rendering,
            })
            .collect::<Vec<_>>();

        let climax = Scene {
            id: CLIMAX_ID.to_string(),
            chapter_number: None,
            title: analysis.climax.title,
            summary: analysis.climax.summary,
            script_segment: Some(analysis.climax.script_segment),
            image_prompt: analysis.climax.image_prompt,
            is_climax: true,
            render: RenderState::Idle,
        };
        let mut scenes = vec![climax];
        scenes.extend(
            analysis
                .chapters
                .into_iter()
                .enumerate()
                .map(|(index, draft)| Scene {
                    id: Scene::chapter_id(index),
                    chapter_number: Some(index as u32 + 1),
                    title: draft.title,
                    summary: draft.summary,
                    script_segment: Some(draft.script_segment),
                    image_prompt: draft.image_prompt,
                    is_climax: false,
                    render: RenderState::Idle,
                }),
        );

        debug!(
            characters = characters.len(),
            scenes = scenes.len(),
            "Populating store from analysis"
        );
        self.characters = characters;
        self.scenes = scenes;
        self.headline = Some(analysis.headline);
        self.style_guide = analysis.visual_style_guide;
    }

    /// Wholesale reset from previously serialized state (project load).
    pub fn replace_all(
        &mut self,
        characters: Vec<Character>,
        scenes: Vec<Scene>,
        headline: Option<Headline>,
        style_guide: String,
    ) {
        debug!(
            characters = characters.len(),
            scenes = scenes.len(),
            "Replacing store contents"
        );
        self.characters = characters;
        self.scenes = scenes;
        self.headline = headline;
        self.style_guide = style_guide;
    }

    /// Looks up a character by id.
    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Looks up a scene by id.
    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// The climax scene, if the store is populated.
    pub fn climax_scene(&self) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.is_climax)
    }

    /// Whether any character portrait is still rendering.
    pub fn any_character_rendering(&self) -> bool {
        self.characters.iter().any(|c| c.render.is_rendering())
    }

    /// Marks one character as rendering, discarding any prior image/error.
    pub fn set_character_rendering(&mut self, id: &str) {
        Self::apply(&mut self.characters, id, RenderState::Rendering);
    }

    /// Records a finished portrait on one character.
    pub fn set_character_ready(&mut self, id: &str, image: ImageData) {
        Self::apply(&mut self.characters, id, RenderState::Ready(image));
    }

    /// Records a failed portrait on one character.
    pub fn set_character_failed(&mut self, id: &str, message: impl Into<String>) {
        Self::apply(&mut self.characters, id, RenderState::Failed(message.into()));
    }

    /// Marks one scene as rendering, discarding any prior image/error.
    pub fn set_scene_rendering(&mut self, id: &str) {
        Self::apply(&mut self.scenes, id, RenderState::Rendering);
    }

    /// Records a finished illustration on one scene.
    pub fn set_scene_ready(&mut self, id: &str, image: ImageData) {
        Self::apply(&mut self.scenes, id, RenderState::Ready(image));
    }

    /// Records a failed illustration on one scene.
    pub fn set_scene_failed(&mut self, id: &str, message: impl Into<String>) {
        Self::apply(&mut self.scenes, id, RenderState::Failed(message.into()));
    }

    /// Applies a render state to exactly one entity; absent ids are a
    /// silent skip so a stale trigger cannot disturb the collection.
    fn apply<T: Renderable>(entities: &mut [T], id: &str, state: RenderState) {
        match entities.iter_mut().find(|e| e.entity_id() == id) {
            Some(entity) => *entity.render_mut() = state,
            None => debug!(id = %id, "Ignoring render update for unknown entity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyreel_core::{CharacterProfile, SceneDraft};

    fn draft(tag: &str) -> SceneDraft {
        SceneDraft {
            title: format!("{tag} title"),
            summary: format!("{tag} summary"),
            script_segment: format!("{tag} segment"),
            image_prompt: format!("{tag} prompt"),
        }
    }

    fn analysis(chapter_count: usize) -> Analysis {
        Analysis {
            headline: Headline {
                line1: "line one".to_string(),
                line2: "line two".to_string(),
            },
            visual_style_guide: "keep faces consistent".to_string(),
            characters: (0..3)
                .map(|i| CharacterProfile {
                    name: format!("name-{i}"),
                    description: format!("desc-{i}"),
                    image_prompt: format!("portrait-{i}"),
                })
                .collect(),
            climax: draft("climax"),
            chapters: (0..chapter_count).map(|i| draft(&format!("ch{i}"))).collect(),
        }
    }

    fn image(byte: u8) -> ImageData {
        ImageData {
            mime: Some("image/png".to_string()),
            data: vec![byte],
        }
    }

    #[test]
    fn populate_assigns_ids_and_chapter_numbers() {
        let mut store = EntityStore::new();
        store.populate(analysis(3));

        let ids: Vec<&str> = store.scenes().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["climax", "chapter-0", "chapter-1", "chapter-2"]);
        let numbers: Vec<Option<u32>> =
            store.scenes().iter().map(|s| s.chapter_number).collect();
        assert_eq!(numbers, [None, Some(1), Some(2), Some(3)]);
        assert!(store.scenes()[0].is_climax);
        assert_eq!(store.scenes().iter().filter(|s| s.is_climax).count(), 1);

        let char_ids: Vec<&str> = store.characters().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(char_ids, ["char-0", "char-1", "char-2"]);
        assert!(store.characters().iter().all(|c| c.render.is_rendering()));
        assert!(store.headline().is_some());
        assert_eq!(store.style_guide(), "keep faces consistent");
    }

    #[test]
    fn per_id_update_touches_exactly_one_entity() {
        let mut store = EntityStore::new();
        store.populate(analysis(2));
        let before = store.clone();

        store.set_character_failed("char-1", "boom");

        for (a, b) in before.characters().iter().zip(store.characters()) {
            if a.id == "char-1" {
                assert_eq!(b.render.error_message(), Some("boom"));
            } else {
                assert_eq!(a, b);
            }
        }
        assert_eq!(before.scenes(), store.scenes());
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let mut store = EntityStore::new();
        store.populate(analysis(1));
        let before = store.clone();

        store.set_scene_ready("chapter-99", image(7));
        store.set_character_rendering("char-99");

        assert_eq!(before, store);
    }

    #[test]
    fn rendering_discards_prior_image_and_error() {
        let mut store = EntityStore::new();
        store.populate(analysis(1));

        store.set_scene_rendering("chapter-0");
        store.set_scene_ready("chapter-0", image(1));
        assert!(store.scene("chapter-0").unwrap().render.is_ready());

        // regenerate: entering Rendering drops the old image
        store.set_scene_rendering("chapter-0");
        let scene = store.scene("chapter-0").unwrap();
        assert!(scene.render.is_rendering());
        assert!(scene.render.image().is_none());

        store.set_scene_failed("chapter-0", "quota");
        let scene = store.scene("chapter-0").unwrap();
        assert_eq!(scene.render.error_message(), Some("quota"));
        assert!(scene.render.image().is_none());
    }

    #[test]
    fn failed_entity_can_reenter_rendering() {
        let mut store = EntityStore::new();
        store.populate(analysis(1));

        store.set_character_failed("char-0", "first failure");
        store.set_character_rendering("char-0");
        assert!(store.character("char-0").unwrap().render.is_rendering());

        store.set_character_ready("char-0", image(2));
        assert!(store.character("char-0").unwrap().render.is_ready());
    }

    #[test]
    fn any_character_rendering_reflects_the_roster() {
        let mut store = EntityStore::new();
        store.populate(analysis(1));
        assert!(store.any_character_rendering());

        for i in 0..3 {
            store.set_character_ready(&Character::id_for(i), image(i as u8));
        }
        assert!(!store.any_character_rendering());
    }
}
