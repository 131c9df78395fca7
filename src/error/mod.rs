//! Error handling for the protocol front end
//!
//! This module provides the error types raised by the token stream and the
//! type parser, along with diagnostic formatting.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for front-end operations
pub type ProtoResult<T> = Result<T, ProtoError>;

/// Main error type for the protocol front end
///
/// The lexer never fails; all errors originate in the token stream or the
/// type parser and abort the current parse with no partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtoError {
    /// A token stream was constructed over zero tokens
    EmptySequence,
    /// The current token was requested from an exhausted stream
    OutOfBounds { index: usize, len: usize },
    /// A type annotation does not begin with an identifier or '['
    InvalidName { found: String },
    /// An opened '[' is never matched by ']'
    MissingEndingBracket,
}

impl ProtoError {
    /// Create a new out-of-bounds error
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// Create a new invalid-name error for the offending token rendering
    pub fn invalid_name(found: impl Into<String>) -> Self {
        Self::InvalidName {
            found: found.into(),
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::EmptySequence | Self::OutOfBounds { .. } => "Token Stream Error",
            Self::InvalidName { .. } | Self::MissingEndingBracket => "Type Parser Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::EmptySequence => "cannot read from an empty token sequence".to_string(),
            Self::OutOfBounds { index, len } => {
                format!("token index {} is past the end of {} tokens", index, len)
            }
            Self::InvalidName { found } => {
                format!("a type must begin with a name or '[', found '{}'", found)
            }
            Self::MissingEndingBracket => "array type is missing its ending ']'".to_string(),
        }
    }
}

impl fmt::Display for ProtoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for ProtoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(ProtoError::EmptySequence.kind(), "Token Stream Error");
        assert_eq!(ProtoError::out_of_bounds(3, 3).kind(), "Token Stream Error");
        assert_eq!(ProtoError::invalid_name(":").kind(), "Type Parser Error");
        assert_eq!(ProtoError::MissingEndingBracket.kind(), "Type Parser Error");
    }

    #[test]
    fn test_error_display() {
        let err = ProtoError::invalid_name(":");
        assert_eq!(
            err.to_string(),
            "Type Parser Error: a type must begin with a name or '[', found ':'"
        );

        let err = ProtoError::out_of_bounds(4, 4);
        assert_eq!(
            err.to_string(),
            "Token Stream Error: token index 4 is past the end of 4 tokens"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ProtoError::invalid_name("x"), ProtoError::invalid_name("x"));
        assert_ne!(ProtoError::MissingEndingBracket, ProtoError::EmptySequence);
    }
}
