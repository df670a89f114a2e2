//! Trait definitions for the AI gateway.

use async_trait::async_trait;
use storyreel_core::{Analysis, AnalyzeRequest, ImageData, RenderRequest};
use storyreel_error::StoryreelResult;

/// Script analysis: one structured request turning a drama script into a
/// headline, a style guide, a character roster, a climax scene and the
/// requested chapter cuts.
///
/// Implementations own prompt templating and response schema validation;
/// they perform no caching and no automatic retry; every call re-analyzes
/// from scratch.
#[async_trait]
pub trait ScriptAnalyzer: Send + Sync {
    /// Analyze a script into its storyboard structure.
    async fn analyze(&self, req: &AnalyzeRequest) -> StoryreelResult<Analysis>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for analysis.
    fn analysis_model(&self) -> &str;
}

/// Image rendering: one composed prompt in, one image payload out.
///
/// Implementations compose the final prompt (subject, portrait clause,
/// style language, style guide, era block) and request the given aspect
/// ratio. No caching, no automatic retry.
#[async_trait]
pub trait ImageRenderer: Send + Sync {
    /// Render a single image for a character portrait or scene cut.
    async fn render(&self, req: &RenderRequest) -> StoryreelResult<ImageData>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used for image rendering.
    fn render_model(&self) -> &str;
}
