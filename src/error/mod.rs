//! Error types for loading serialized trees.
//!
//! Rendering itself is infallible. The only fallible surface of the crate
//! is decoding a tree from its JSON form (see [`crate::tree::json`]), which
//! can fail on I/O or on malformed input. Decode failures carry the source
//! position reported by the decoder.

use std::fmt;
use std::io;

/// Source location within a JSON input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The error type returned when a tree cannot be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// Reading the input failed.
    Io(io::Error),
    /// The input is not a valid JSON tree document.
    Json(serde_json::Error),
}

impl LoadError {
    /// Returns where in the input a decode error occurred, if known.
    #[must_use]
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::Io(_) => None,
            Self::Json(e) if e.line() == 0 => None,
            Self::Json(e) => Some(SourceLocation {
                line: e.line(),
                column: e.column(),
            }),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "read error: {e}"),
            Self::Json(e) => write!(f, "invalid tree document: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports I/O failures through its own error type.
        if e.is_io() {
            return Self::Io(io::Error::from(e));
        }
        Self::Json(e)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation { line: 3, column: 7 };
        assert_eq!(loc.to_string(), "3:7");
    }

    #[test]
    fn test_json_error_has_location() {
        let err: LoadError = serde_json::from_str::<serde_json::Value>("{\n  \"kind\": }")
            .unwrap_err()
            .into();
        assert!(matches!(err, LoadError::Json(_)));
        let loc = err.location().unwrap();
        assert_eq!(loc.line, 2);
        assert!(err.to_string().starts_with("invalid tree document: "));
    }

    #[test]
    fn test_io_error_display_and_source() {
        let err = LoadError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "read error: gone");
        assert!(err.location().is_none());
        assert!(std::error::Error::source(&err).is_some());
    }
}
