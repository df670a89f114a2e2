//! Gateway error types for the remote AI services.

/// The error signal Google returns when a request is made with a key that
/// has no access to the requested model.
const CREDENTIAL_REJECTION_SIGNAL: &str = "Requested entity was not found";

/// Specific error conditions for gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GatewayErrorKind {
    /// No API credential could be resolved from any source
    #[display("No API credential configured (storyreel.toml api_key or GEMINI_API_KEY)")]
    MissingCredential,
    /// The response was empty or did not match the expected shape
    #[display("Malformed model response: {}", _0)]
    MalformedResponse(String),
    /// The image response carried no inline image payload
    #[display("Image response contained no image data")]
    NoImageReturned,
    /// The remote service rejected the request
    #[display("Upstream rejected request (HTTP {}): {}", status, message)]
    UpstreamRejected {
        /// HTTP status code surfaced by the service
        status: u16,
        /// Error body or message
        message: String,
    },
}

impl GatewayErrorKind {
    /// Whether this error indicates an unauthorized or unselected credential.
    ///
    /// The remote service reports a key without access to the requested
    /// model as an "entity not found" condition. Callers should treat this
    /// as an invitation to (re)select a credential, not a fatal failure.
    pub fn is_credential_rejection(&self) -> bool {
        match self {
            GatewayErrorKind::MissingCredential => true,
            GatewayErrorKind::UpstreamRejected { message, .. } => {
                message.contains(CREDENTIAL_REJECTION_SIGNAL)
            }
            _ => false,
        }
    }
}

/// Gateway error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyreel_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::NoImageReturned);
/// assert!(format!("{}", err).contains("no image data"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The kind of error that occurred
    pub kind: GatewayErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error indicates an unauthorized or unselected credential.
    pub fn is_credential_rejection(&self) -> bool {
        self.kind.is_credential_rejection()
    }
}
