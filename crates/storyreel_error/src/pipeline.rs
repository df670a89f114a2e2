//! Pipeline error types.

/// Specific error conditions for pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Script text was empty or whitespace-only
    #[display("Script text cannot be empty")]
    EmptyScript,
    /// Requested chapter count is below the minimum of one
    #[display("Chapter count must be at least 1, got {}", _0)]
    InvalidChapterCount(u32),
    /// An operation was requested in a phase that does not permit it
    #[display("Operation requires phase {}, pipeline is in {}", expected, actual)]
    PhaseViolation {
        /// Phase the operation requires
        expected: String,
        /// Phase the pipeline is actually in
        actual: String,
    },
    /// Storyboard generation requested while character portraits render
    #[display("Cannot start storyboard while character portraits are still rendering")]
    CharactersPending,
    /// No entity with the given id exists in the session
    #[display("No entity with id '{}'", _0)]
    UnknownEntity(String),
}

/// Pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::EmptyScript);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
