//! Projector error types.

use thiserror::Error;

/// Errors raised while decoding a select request.
///
/// Projection itself never fails; these only come from the envelope decoder.
#[derive(Debug, Error)]
pub enum ProjectorError {
    /// The request body is not a valid `{ data, fields }` envelope.
    #[error("Request decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for projector operations.
pub type Result<T> = std::result::Result<T, ProjectorError>;
