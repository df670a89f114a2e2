//! Request types for the AI gateway.

use crate::{AspectRatio, Era, ImageStyle};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Request for the script-analysis operation.
///
/// # Examples
///
/// ```
/// use storyreel_core::{AnalyzeRequest, Era, ImageStyle};
///
/// let request = AnalyzeRequest::builder()
///     .script_text("INT. 카페 - 낮".to_string())
///     .chapter_count(4u32)
///     .style(ImageStyle::Cinematic)
///     .era(Era::Modern)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.chapter_count, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct AnalyzeRequest {
    /// The full drama script, verbatim
    pub script_text: String,
    /// Number of chapter cuts to partition the story into (>= 1)
    #[builder(default = "6")]
    pub chapter_count: u32,
    /// Visual style the renders will use, echoed into the analysis prompt
    #[builder(default)]
    pub style: ImageStyle,
    /// Historical setting of the drama
    #[builder(default)]
    pub era: Era,
}

impl AnalyzeRequest {
    /// Start building an [`AnalyzeRequest`].
    pub fn builder() -> AnalyzeRequestBuilder {
        AnalyzeRequestBuilder::default()
    }
}

/// Request for a single image render.
///
/// # Examples
///
/// ```
/// use storyreel_core::{AspectRatio, Era, ImageStyle, RenderRequest};
///
/// let request = RenderRequest::builder()
///     .subject_prompt("A detective under neon rain".to_string())
///     .style(ImageStyle::WebtoonThriller)
///     .style_guide("Muted palette".to_string())
///     .era(Era::Modern)
///     .aspect_ratio(AspectRatio::Wide)
///     .portrait(false)
///     .build()
///     .unwrap();
///
/// assert!(!request.portrait);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct RenderRequest {
    /// The subject prompt (a character or scene `image_prompt`)
    pub subject_prompt: String,
    /// Visual style selecting the rendering-language clause
    #[builder(default)]
    pub style: ImageStyle,
    /// Style guide text from analysis, kept identical across renders
    #[builder(default)]
    pub style_guide: String,
    /// Historical setting selecting the era descriptor block
    #[builder(default)]
    pub era: Era,
    /// Requested aspect ratio
    #[builder(default)]
    pub aspect_ratio: AspectRatio,
    /// Whether to force a single-person centered portrait composition
    #[builder(default)]
    pub portrait: bool,
}

impl RenderRequest {
    /// Start building a [`RenderRequest`].
    pub fn builder() -> RenderRequestBuilder {
        RenderRequestBuilder::default()
    }
}
