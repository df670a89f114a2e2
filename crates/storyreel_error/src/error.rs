//! Top-level error wrapper types.

use crate::{ConfigError, GatewayError, HttpError, JsonError, PipelineError, ProjectError};

/// This is the foundation error enum aggregating the error families of the
/// Storyreel workspace.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StoryreelError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryreelErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// AI gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Pipeline orchestration error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Project snapshot error
    #[from(ProjectError)]
    Project(ProjectError),
}

/// Storyreel error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, ConfigError};
///
/// fn might_fail() -> StoryreelResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyreel Error: {}", _0)]
pub struct StoryreelError(Box<StoryreelErrorKind>);

impl StoryreelError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryreelErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryreelErrorKind {
        &self.0
    }

    /// Whether this error indicates an unauthorized or unselected credential.
    ///
    /// Convenience passthrough so callers holding the top-level error can
    /// still offer the credential-reselection recovery path.
    pub fn is_credential_rejection(&self) -> bool {
        matches!(self.kind(), StoryreelErrorKind::Gateway(e) if e.is_credential_rejection())
    }
}

// Generic From implementation for any type that converts to StoryreelErrorKind
impl<T> From<T> for StoryreelError
where
    T: Into<StoryreelErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyreel operations.
///
/// # Examples
///
/// ```
/// use storyreel_error::{StoryreelResult, HttpError};
///
/// fn fetch_data() -> StoryreelResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type StoryreelResult<T> = std::result::Result<T, StoryreelError>;
