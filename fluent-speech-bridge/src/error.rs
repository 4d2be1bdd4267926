//! Error types for the speech bridge

use thiserror::Error;

/// Result alias for speech operations
pub type SpeechResult<T> = Result<T, SpeechError>;

/// Errors surfaced by the speech capability boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpeechError {
    /// The platform has no engine for the requested capability
    #[error("speech capability is not supported on this platform")]
    Unsupported,

    /// The engine failed to start or service a request
    #[error("speech engine failure: {0}")]
    Engine(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SpeechError::Unsupported.to_string(),
            "speech capability is not supported on this platform"
        );
        assert_eq!(
            SpeechError::Engine("mic busy".into()).to_string(),
            "speech engine failure: mic busy"
        );
    }
}
