//! The storyboard pipeline controller.

use crate::Phase;
use storyreel_core::{
    AnalyzeRequest, AspectRatio, CLIMAX_ID, Era, ImageStyle, RenderRequest, Session,
};
use storyreel_error::{
    PipelineError, PipelineErrorKind, StoryreelError, StoryreelErrorKind, StoryreelResult,
};
use storyreel_interface::{ImageRenderer, ScriptAnalyzer};
use storyreel_store::EntityStore;
use tracing::{debug, warn};

/// Drives storyboard generation against a gateway implementation.
///
/// The pipeline owns the session's working state: the submitted script, the
/// generation settings, the entity store, the global [`Phase`], and the
/// phase-level error. All mutation goes through `&mut self` methods, so two
/// gateway calls can never overlap for one controller; the character batch
/// is an explicit in-order sequence and every other render is an
/// independent user-triggered action guarded per entity.
///
/// # Examples
///
/// ```no_run
/// use storyreel_models::GeminiStoryboard;
/// use storyreel_pipeline::{Phase, StoryboardPipeline};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = GeminiStoryboard::with_resolved_credential()?;
/// let mut pipeline = StoryboardPipeline::new(gateway);
/// pipeline.set_chapter_count(4);
/// pipeline.submit("INT. 골목길 - 밤 ...").await?;
/// assert_eq!(pipeline.phase(), Phase::CharacterConfirm);
/// pipeline.start_storyboard().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StoryboardPipeline<G> {
    gateway: G,
    script_text: String,
    chapter_count: u32,
    style: ImageStyle,
    era: Era,
    aspect_ratio: AspectRatio,
    store: EntityStore,
    phase: Phase,
    phase_error: Option<String>,
    credential_rejected: bool,
}

impl<G> StoryboardPipeline<G> {
    /// Create an idle pipeline around a gateway.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            script_text: String::new(),
            chapter_count: 6,
            style: ImageStyle::default(),
            era: Era::default(),
            aspect_ratio: AspectRatio::default(),
            store: EntityStore::new(),
            phase: Phase::Idle,
            phase_error: None,
            credential_rejected: false,
        }
    }

    /// Set the number of chapter cuts for the next submission.
    pub fn set_chapter_count(&mut self, chapter_count: u32) {
        self.chapter_count = chapter_count;
    }

    /// Set the visual style for the next submission.
    pub fn set_style(&mut self, style: ImageStyle) {
        self.style = style;
    }

    /// Set the era for the next submission.
    pub fn set_era(&mut self, era: Era) {
        self.era = era;
    }

    /// Set the aspect ratio for the next submission.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: AspectRatio) {
        self.aspect_ratio = aspect_ratio;
    }

    /// The current global phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The recorded phase-level error message, if any.
    pub fn phase_error(&self) -> Option<&str> {
        self.phase_error.as_deref()
    }

    /// Whether the last operation hit the unauthorized-credential condition.
    ///
    /// A UX recovery aid: the caller should invite the user to (re)select a
    /// credential; the failed request itself stays failed until manually
    /// retried.
    pub fn credential_rejected(&self) -> bool {
        self.credential_rejected
    }

    /// Read access to the session's entities.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Clear the phase-level error display without touching entity state.
    ///
    /// The phase itself only leaves `Errored` through a new submission.
    pub fn dismiss_error(&mut self) {
        self.phase_error = None;
    }

    /// Snapshot the working state for the project codec.
    pub fn session(&self) -> Session {
        Session {
            script_text: self.script_text.clone(),
            chapter_count: self.chapter_count,
            style: self.style,
            era: self.era,
            aspect_ratio: self.aspect_ratio,
            scenes: self.store.scenes().clone(),
            characters: self.store.characters().clone(),
            headline: self.store.headline().clone(),
            style_guide: self.store.style_guide().clone(),
        }
    }

    /// Restore a saved session, bypassing every intermediate phase.
    ///
    /// No analysis or render is replayed; the pipeline lands directly in
    /// `Complete` with the snapshot's entities.
    pub fn load_session(&mut self, session: Session) {
        debug!(
            scenes = session.scenes.len(),
            characters = session.characters.len(),
            "Loading session snapshot"
        );
        self.script_text = session.script_text;
        self.chapter_count = session.chapter_count;
        self.style = session.style;
        self.era = session.era;
        self.aspect_ratio = session.aspect_ratio;
        self.store.replace_all(
            session.characters,
            session.scenes,
            session.headline,
            session.style_guide,
        );
        self.phase_error = None;
        self.credential_rejected = false;
        self.phase = Phase::Complete;
    }

    /// Condense an error for display on an entity card: the gateway kind
    /// alone, without the wrapper chain.
    fn failure_message(error: &StoryreelError) -> String {
        match error.kind() {
            StoryreelErrorKind::Gateway(e) => e.kind.to_string(),
            other => other.to_string(),
        }
    }

    fn note_failure(&mut self, error: &StoryreelError) {
        if error.is_credential_rejection() {
            warn!("Gateway rejected the API credential");
            self.credential_rejected = true;
        }
    }
}

impl<G> StoryboardPipeline<G>
where
    G: ScriptAnalyzer + ImageRenderer,
{
    fn render_request(&self, subject_prompt: String, portrait: bool) -> RenderRequest {
        RenderRequest {
            subject_prompt,
            style: self.style,
            style_guide: self.store.style_guide().clone(),
            era: self.era,
            aspect_ratio: self.aspect_ratio,
            portrait,
        }
    }

    /// Submit a script: analyze it, populate the store, and render the
    /// character roster in order.
    ///
    /// A new submission is a wholesale reset and is accepted from any
    /// phase, which is also the only road out of `Errored`. An empty script
    /// is rejected before any state changes. Analysis failure records the
    /// message and parks the pipeline in `Errored`; portrait failures stay
    /// on their entities and the pipeline still reaches
    /// `CharacterConfirm`.
    #[tracing::instrument(skip(self, script), fields(chapters = self.chapter_count))]
    pub async fn submit(&mut self, script: &str) -> StoryreelResult<()> {
        if script.trim().is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyScript).into());
        }
        if self.chapter_count < 1 {
            return Err(
                PipelineError::new(PipelineErrorKind::InvalidChapterCount(self.chapter_count))
                    .into(),
            );
        }

        self.script_text = script.to_string();
        self.store = EntityStore::new();
        self.phase_error = None;
        self.credential_rejected = false;
        self.phase = Phase::Analyzing;

        let request = AnalyzeRequest {
            script_text: self.script_text.clone(),
            chapter_count: self.chapter_count,
            style: self.style,
            era: self.era,
        };

        let analysis = match self.gateway.analyze(&request).await {
            Ok(analysis) => analysis,
            Err(error) => {
                self.note_failure(&error);
                self.phase_error = Some(Self::failure_message(&error));
                self.phase = Phase::Errored;
                return Err(error);
            }
        };

        self.store.populate(analysis);
        self.phase = Phase::CharacterGenerating;

        // Portraits render one at a time, in roster order, so partial
        // results fill in predictably; a failure never skips the rest.
        let roster: Vec<(String, String)> = self
            .store
            .characters()
            .iter()
            .map(|c| (c.id.clone(), c.image_prompt.clone()))
            .collect();
        for (id, subject) in roster {
            let request = self.render_request(subject, true);
            match self.gateway.render(&request).await {
                Ok(image) => self.store.set_character_ready(&id, image),
                Err(error) => {
                    self.note_failure(&error);
                    self.store
                        .set_character_failed(&id, Self::failure_message(&error));
                }
            }
        }

        self.phase = Phase::CharacterConfirm;
        Ok(())
    }

    /// Begin the storyboard: render the climax scene and complete.
    ///
    /// Gated on the confirmation screen: rejected unless the phase is
    /// `CharacterConfirm` and no portrait is still rendering. The climax
    /// outcome (success or failure) lands on the climax entity; chapter
    /// scenes stay idle for on-demand generation.
    #[tracing::instrument(skip(self))]
    pub async fn start_storyboard(&mut self) -> StoryreelResult<()> {
        if self.phase != Phase::CharacterConfirm {
            return Err(PipelineError::new(PipelineErrorKind::PhaseViolation {
                expected: Phase::CharacterConfirm.to_string(),
                actual: self.phase.to_string(),
            })
            .into());
        }
        if self.store.any_character_rendering() {
            return Err(PipelineError::new(PipelineErrorKind::CharactersPending).into());
        }

        self.phase = Phase::ImageGenerating;
        if let Some(climax) = self.store.climax_scene() {
            let subject = climax.image_prompt.clone();
            self.store.set_scene_rendering(CLIMAX_ID);
            let request = self.render_request(subject, false);
            match self.gateway.render(&request).await {
                Ok(image) => self.store.set_scene_ready(CLIMAX_ID, image),
                Err(error) => {
                    self.note_failure(&error);
                    self.store
                        .set_scene_failed(CLIMAX_ID, Self::failure_message(&error));
                }
            }
        }
        self.phase = Phase::Complete;
        Ok(())
    }

    /// Render one scene on demand: first generation, retry after failure,
    /// or regeneration over an existing image.
    ///
    /// Available once the pipeline is `Complete`. A scene that is already
    /// rendering is skipped silently, the disabled-trigger guard against
    /// stale writes.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn render_scene(&mut self, id: &str) -> StoryreelResult<()> {
        if self.phase != Phase::Complete {
            return Err(PipelineError::new(PipelineErrorKind::PhaseViolation {
                expected: Phase::Complete.to_string(),
                actual: self.phase.to_string(),
            })
            .into());
        }
        let scene = self
            .store
            .scene(id)
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::UnknownEntity(id.to_string())))?;
        if scene.render.is_rendering() {
            debug!(id = %id, "Scene already rendering; ignoring trigger");
            return Ok(());
        }
        let subject = scene.image_prompt.clone();

        self.store.set_scene_rendering(id);
        let request = self.render_request(subject, false);
        match self.gateway.render(&request).await {
            Ok(image) => self.store.set_scene_ready(id, image),
            Err(error) => {
                self.note_failure(&error);
                self.store.set_scene_failed(id, Self::failure_message(&error));
            }
        }
        Ok(())
    }

    /// Re-render one character portrait on demand.
    ///
    /// Available any time after the confirmation screen is first reached,
    /// independent of the global phase. Same in-flight guard as scenes.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn render_character(&mut self, id: &str) -> StoryreelResult<()> {
        if !matches!(
            self.phase,
            Phase::CharacterConfirm | Phase::ImageGenerating | Phase::Complete
        ) {
            return Err(PipelineError::new(PipelineErrorKind::PhaseViolation {
                expected: Phase::CharacterConfirm.to_string(),
                actual: self.phase.to_string(),
            })
            .into());
        }
        let character = self
            .store
            .character(id)
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::UnknownEntity(id.to_string())))?;
        if character.render.is_rendering() {
            debug!(id = %id, "Portrait already rendering; ignoring trigger");
            return Ok(());
        }
        let subject = character.image_prompt.clone();

        self.store.set_character_rendering(id);
        let request = self.render_request(subject, true);
        match self.gateway.render(&request).await {
            Ok(image) => self.store.set_character_ready(id, image),
            Err(error) => {
                self.note_failure(&error);
                self.store
                    .set_character_failed(id, Self::failure_message(&error));
            }
        }
        Ok(())
    }
}
