//! Error types for MIME generation.

/// Result type alias for MIME operations.
pub type Result<T> = std::result::Result<T, Error>;

/// MIME generation error types.
///
/// These only surface from [`render`](crate::render): a built tree is
/// always structurally valid, so the remaining failure mode is a header
/// that cannot be put on the wire.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Header name is empty or contains a colon or control characters.
    #[error("Invalid header name: {0:?}")]
    InvalidHeaderName(String),

    /// Header value contains a line break.
    #[error("Invalid value for header {0:?}: embedded line break")]
    InvalidHeaderValue(String),
}
