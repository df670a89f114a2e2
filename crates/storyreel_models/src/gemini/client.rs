//! Gemini REST client implementing the storyboard gateway traits.

use async_trait::async_trait;
use base64::Engine;
use tracing::{debug, instrument};

use storyreel_core::{Analysis, AnalyzeRequest, ImageData, RenderRequest};
use storyreel_error::{
    GatewayError, GatewayErrorKind, HttpError, StoryreelResult,
};
use storyreel_interface::{ImageRenderer, ScriptAnalyzer};

use super::dto::{
    ContentPayload, ErrorEnvelope, GenerateContentPayload, GenerateContentResponse,
    GenerationConfigPayload, ImageConfigPayload, PartPayload,
};
use super::{prompt, schema};
use crate::ApiCredential;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text model used for script analysis.
pub const ANALYSIS_MODEL: &str = "gemini-3-pro-preview";

/// Image model used for portrait and scene renders.
pub const RENDER_MODEL: &str = "gemini-2.5-flash-image";

/// Gateway client for the Google Gemini API.
///
/// One instance serves both remote operations: script analysis via
/// [`ANALYSIS_MODEL`] with a structured response schema, and image
/// rendering via [`RENDER_MODEL`] with aspect-ratio control. The client
/// performs no caching and no automatic retry; every invocation re-issues
/// the remote call.
///
/// # Examples
///
/// ```no_run
/// use storyreel_core::AnalyzeRequest;
/// use storyreel_interface::ScriptAnalyzer;
/// use storyreel_models::GeminiStoryboard;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = GeminiStoryboard::with_resolved_credential()?;
/// let request = AnalyzeRequest::builder()
///     .script_text("INT. 한옥 마당 - 밤".to_string())
///     .build()?;
/// let analysis = gateway.analyze(&request).await?;
/// println!("{} chapters", analysis.chapters.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiStoryboard {
    client: reqwest::Client,
    credential: ApiCredential,
    base_url: String,
}

impl std::fmt::Debug for GeminiStoryboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiStoryboard")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

impl GeminiStoryboard {
    /// Create a client with an already-resolved credential.
    pub fn new(credential: ApiCredential) -> Self {
        Self {
            client: reqwest::Client::new(),
            credential,
            base_url: API_BASE.to_string(),
        }
    }

    /// Create a client by resolving a credential from the configured
    /// sources (storyreel.toml, then `GEMINI_API_KEY`).
    ///
    /// # Errors
    ///
    /// Fails with `MissingCredential` when no source yields a key. This is
    /// a recoverable condition the caller should surface as an invitation
    /// to configure one, not a fatal error.
    #[instrument(name = "gemini_storyboard_new")]
    pub fn with_resolved_credential() -> StoryreelResult<Self> {
        let credential = ApiCredential::resolve()
            .ok_or_else(|| GatewayError::new(GatewayErrorKind::MissingCredential))?;
        Ok(Self::new(credential))
    }

    /// Override the API base URL (integration tests point this at a local
    /// server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// POST one `generateContent` request and parse the envelope.
    async fn post(
        &self,
        model: &str,
        payload: &GenerateContentPayload,
    ) -> StoryreelResult<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.credential.key())
            .json(payload)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The envelope carries the useful message; fall back to the raw
            // body when it is not the documented error shape.
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(GatewayError::new(GatewayErrorKind::UpstreamRejected {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        response.json::<GenerateContentResponse>().await.map_err(|e| {
            GatewayError::new(GatewayErrorKind::MalformedResponse(format!(
                "Failed to parse response envelope: {}",
                e
            )))
            .into()
        })
    }
}

#[async_trait]
impl ScriptAnalyzer for GeminiStoryboard {
    #[instrument(skip(self, req), fields(chapters = req.chapter_count, era = %req.era))]
    async fn analyze(&self, req: &AnalyzeRequest) -> StoryreelResult<Analysis> {
        let payload = GenerateContentPayload {
            contents: vec![ContentPayload {
                parts: vec![
                    PartPayload {
                        text: prompt::analysis_instruction(req),
                    },
                    PartPayload {
                        text: req.script_text.clone(),
                    },
                ],
            }],
            generation_config: Some(GenerationConfigPayload {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema::analysis_response_schema()),
                image_config: None,
            }),
        };

        let response = self.post(ANALYSIS_MODEL, &payload).await?;
        let text = response.first_text().ok_or_else(|| {
            GatewayError::new(GatewayErrorKind::MalformedResponse(
                "Response contained no text payload".to_string(),
            ))
        })?;

        serde_json::from_str::<Analysis>(text).map_err(|e| {
            GatewayError::new(GatewayErrorKind::MalformedResponse(format!(
                "Analysis did not match the response schema: {}",
                e
            )))
            .into()
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn analysis_model(&self) -> &str {
        ANALYSIS_MODEL
    }
}

#[async_trait]
impl ImageRenderer for GeminiStoryboard {
    #[instrument(
        skip(self, req),
        fields(portrait = req.portrait, aspect_ratio = %req.aspect_ratio)
    )]
    async fn render(&self, req: &RenderRequest) -> StoryreelResult<ImageData> {
        let payload = GenerateContentPayload {
            contents: vec![ContentPayload {
                parts: vec![PartPayload {
                    text: prompt::render_prompt(req),
                }],
            }],
            generation_config: Some(GenerationConfigPayload {
                response_mime_type: None,
                response_schema: None,
                image_config: Some(ImageConfigPayload {
                    aspect_ratio: req.aspect_ratio.as_str().to_string(),
                }),
            }),
        };

        let response = self.post(RENDER_MODEL, &payload).await?;
        let inline = response
            .first_inline_data()
            .ok_or_else(|| GatewayError::new(GatewayErrorKind::NoImageReturned))?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| {
                GatewayError::new(GatewayErrorKind::MalformedResponse(format!(
                    "Image payload was not valid base64: {}",
                    e
                )))
            })?;

        Ok(ImageData {
            mime: inline.mime_type.clone(),
            data,
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn render_model(&self) -> &str {
        RENDER_MODEL
    }
}
