//! Test utilities for pipeline tests.
//!
//! Provides a scripted mock gateway: analysis outcomes and render outcomes
//! queue up per call, with deterministic defaults when the queue is empty.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storyreel_core::{
    Analysis, AnalyzeRequest, CharacterProfile, Headline, ImageData, RenderRequest, SceneDraft,
};
use storyreel_error::{GatewayError, GatewayErrorKind, StoryreelResult};
use storyreel_interface::{ImageRenderer, ScriptAnalyzer};

/// Scripted outcome for one render call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return a deterministic image derived from the subject prompt.
    Succeed,
    /// Fail with the given gateway error.
    Fail(GatewayErrorKind),
    /// Never resolve; used to park an entity in rendering state.
    Pending,
}

#[derive(Debug, Default)]
struct Inner {
    analyze_queue: Mutex<VecDeque<Result<Analysis, GatewayErrorKind>>>,
    fallback_analysis: Mutex<Option<Analysis>>,
    render_queue: Mutex<VecDeque<MockOutcome>>,
    render_log: Mutex<Vec<RenderRequest>>,
    analyze_calls: AtomicUsize,
    render_calls: AtomicUsize,
}

/// Mock gateway with shared state across clones.
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    inner: Arc<Inner>,
}

impl MockGateway {
    /// A gateway whose every analysis returns `analysis` and every render
    /// succeeds.
    pub fn new(analysis: Analysis) -> Self {
        let mock = Self::default();
        *mock.inner.fallback_analysis.lock().unwrap() = Some(analysis);
        mock
    }

    /// Queue one analysis failure ahead of the fallback analysis.
    pub fn queue_analyze_error(&self, kind: GatewayErrorKind) {
        self.inner
            .analyze_queue
            .lock()
            .unwrap()
            .push_back(Err(kind));
    }

    /// Queue render outcomes consumed in call order; once drained, renders
    /// succeed.
    pub fn queue_renders(&self, outcomes: impl IntoIterator<Item = MockOutcome>) {
        self.inner
            .render_queue
            .lock()
            .unwrap()
            .extend(outcomes);
    }

    /// Every render request seen so far, in call order.
    pub fn render_log(&self) -> Vec<RenderRequest> {
        self.inner.render_log.lock().unwrap().clone()
    }

    pub fn analyze_calls(&self) -> usize {
        self.inner.analyze_calls.load(Ordering::SeqCst)
    }

    pub fn render_calls(&self) -> usize {
        self.inner.render_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScriptAnalyzer for MockGateway {
    async fn analyze(&self, _req: &AnalyzeRequest) -> StoryreelResult<Analysis> {
        self.inner.analyze_calls.fetch_add(1, Ordering::SeqCst);
        let queued = self.inner.analyze_queue.lock().unwrap().pop_front();
        match queued {
            Some(Ok(analysis)) => Ok(analysis),
            Some(Err(kind)) => Err(GatewayError::new(kind).into()),
            None => {
                let fallback = self.inner.fallback_analysis.lock().unwrap().clone();
                Ok(fallback.expect("MockGateway has no analysis configured"))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }

    fn analysis_model(&self) -> &str {
        "mock-analysis"
    }
}

#[async_trait]
impl ImageRenderer for MockGateway {
    async fn render(&self, req: &RenderRequest) -> StoryreelResult<ImageData> {
        let call = self.inner.render_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.render_log.lock().unwrap().push(req.clone());
        let outcome = self
            .inner
            .render_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockOutcome::Succeed);
        match outcome {
            MockOutcome::Succeed => Ok(ImageData {
                mime: Some("image/png".to_string()),
                data: format!("{}#{}", req.subject_prompt, call).into_bytes(),
            }),
            MockOutcome::Fail(kind) => Err(GatewayError::new(kind).into()),
            MockOutcome::Pending => {
                std::future::pending::<StoryreelResult<ImageData>>().await
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }

    fn render_model(&self) -> &str {
        "mock-render"
    }
}

/// An analysis with three characters and `chapter_count` chapters.
pub fn sample_analysis(chapter_count: usize) -> Analysis {
    Analysis {
        headline: Headline {
            line1: "그날 밤,".to_string(),
            line2: "모든 것이 바뀌었다".to_string(),
        },
        visual_style_guide: "Sharp jawlines, warm rim light".to_string(),
        characters: (0..3)
            .map(|i| CharacterProfile {
                name: format!("인물 {i}"),
                description: format!("설명 {i}"),
                image_prompt: format!("portrait-{i}"),
            })
            .collect(),
        climax: SceneDraft {
            title: "결전".to_string(),
            summary: "옥상 대치".to_string(),
            script_segment: "민수: 거기까지야.".to_string(),
            image_prompt: "climax-cut".to_string(),
        },
        chapters: (0..chapter_count)
            .map(|i| SceneDraft {
                title: format!("컷 {i}"),
                summary: format!("요약 {i}"),
                script_segment: format!("대사 {i}"),
                image_prompt: format!("chapter-cut-{i}"),
            })
            .collect(),
    }
}
