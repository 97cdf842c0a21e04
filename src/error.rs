//! Error types for the spectrogram pipeline

use std::fmt;

/// Errors that can occur while turning a WAV file into spectrograms
#[derive(Debug, Clone, PartialEq)]
pub enum SpectrogramError {
    /// Invalid configuration parameters
    InvalidInput(String),

    /// File missing, unreadable, or not a valid mono WAV stream
    DecodeError(String),

    /// A shape invariant was violated (e.g. wrong frame length)
    ShapeError(String),
}

impl fmt::Display for SpectrogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectrogramError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SpectrogramError::DecodeError(msg) => write!(f, "Decoding error: {}", msg),
            SpectrogramError::ShapeError(msg) => write!(f, "Shape error: {}", msg),
        }
    }
}

impl std::error::Error for SpectrogramError {}

impl From<hound::Error> for SpectrogramError {
    fn from(err: hound::Error) -> Self {
        SpectrogramError::DecodeError(err.to_string())
    }
}

impl From<ndarray::ShapeError> for SpectrogramError {
    fn from(err: ndarray::ShapeError) -> Self {
        SpectrogramError::ShapeError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = SpectrogramError::DecodeError("no such file".to_string());
        assert_eq!(err.to_string(), "Decoding error: no such file");

        let err = SpectrogramError::ShapeError("frame length 8000".to_string());
        assert!(err.to_string().starts_with("Shape error"));
    }

    #[test]
    fn test_hound_errors_become_decode_errors() {
        let err: SpectrogramError = hound::Error::FormatError("bad header").into();
        assert!(matches!(err, SpectrogramError::DecodeError(_)));
    }
}
