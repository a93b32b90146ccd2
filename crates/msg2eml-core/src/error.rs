//! Error types for the conversion core.

use thiserror::Error;

/// Errors that can abort a whole conversion.
///
/// Field-level and structural anomalies never surface here; they are
/// reported through the log sink and the conversion degrades in place.
#[derive(Debug, Error)]
pub enum Error {
    /// The host parser could not construct a source message from the input.
    #[error("Failed to read source message: {0}")]
    Parse(#[source] anyhow::Error),

    /// The built message could not be rendered to bytes.
    #[error("Failed to serialize message: {0}")]
    Render(#[from] msg2eml_mime::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
