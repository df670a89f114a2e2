//! Project snapshot error types.

/// Specific error conditions for project save/load operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProjectErrorKind {
    /// The snapshot document could not be parsed as structured data at all
    #[display("Corrupt project snapshot: {}", _0)]
    CorruptProject(String),
    /// Reading or writing the snapshot file failed
    #[display("Project file I/O failed: {}", _0)]
    Io(String),
}

/// Project codec error with source location tracking.
///
/// Missing or extra snapshot fields never produce this error; the codec
/// defaults them. Only an unparseable document or a filesystem failure does.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Project Error: {} at line {} in {}", kind, line, file)]
pub struct ProjectError {
    /// The specific error condition
    pub kind: ProjectErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ProjectError {
    /// Create a new ProjectError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProjectErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
