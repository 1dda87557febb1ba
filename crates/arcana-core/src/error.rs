//! Error types for the reading pipeline.

use thiserror::Error;

/// Result type for reading operations.
pub type ArcanaResult<T> = Result<T, ArcanaError>;

/// Opaque failure reported by an external capability (tone classifier or
/// generation gateway).
///
/// Capability implementations wrap whatever went wrong (transport failure,
/// timeout, malformed model output) into the message; the pipeline only
/// needs to know that the call did not produce a usable result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct CapabilityError(pub String);

impl CapabilityError {
    /// Wrap a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors that can abort a reading.
///
/// Missing catalog entries never appear here: an unknown card or spread is
/// recovered locally with a placeholder (see `ReadingComposer`). Only the
/// two external capabilities can fail a reading outright.
#[derive(Debug, Error)]
pub enum ArcanaError {
    /// The tone classifier failed.
    #[error("tone classifier failed: {0}")]
    Classifier(CapabilityError),

    /// The generation gateway failed. No interpretation text is fabricated
    /// in this case.
    #[error("generation gateway failed: {0}")]
    Generation(CapabilityError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_names_failed_capability() {
        let e = ArcanaError::Classifier(CapabilityError::new("model unavailable"));
        assert_eq!(e.to_string(), "tone classifier failed: model unavailable");

        let e = ArcanaError::Generation(CapabilityError::new("timed out"));
        assert_eq!(e.to_string(), "generation gateway failed: timed out");
    }
}
