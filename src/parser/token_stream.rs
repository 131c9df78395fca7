//! Token stream consumed by the parsers
//!
//! This module wraps a lexed token sequence with a movable read position.

use crate::error::{ProtoError, ProtoResult};
use crate::lexer::Token;

/// A read cursor over a non-empty token sequence
///
/// The stream never mutates or reallocates the underlying tokens. Advancing
/// past the last token leaves the stream exhausted; callers must check for
/// exhaustion before dereferencing the current token.
pub struct TokenStream {
    tokens: Vec<Token>,
    current: usize,
}

impl TokenStream {
    /// Create a new stream over a token sequence
    ///
    /// Fails with `EmptySequence` when handed zero tokens.
    pub fn new(tokens: Vec<Token>) -> ProtoResult<Self> {
        if tokens.is_empty() {
            return Err(ProtoError::EmptySequence);
        }

        Ok(Self { tokens, current: 0 })
    }

    /// Get the token at the read position
    ///
    /// Fails with `OutOfBounds` when the stream is exhausted.
    pub fn current(&self) -> ProtoResult<&Token> {
        self.tokens
            .get(self.current)
            .ok_or_else(|| ProtoError::out_of_bounds(self.current, self.tokens.len()))
    }

    /// Move the read position forward by one; no-op once exhausted
    pub fn advance(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }

    /// Check if the read position is past the last token
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Get the current read position
    pub fn position(&self) -> usize {
        self.current
    }

    /// Get the number of tokens in the stream (never zero)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Get the underlying token sequence, for diagnostic rendering
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_is_rejected() {
        let result = TokenStream::new(Vec::new());
        assert_eq!(result.err(), Some(ProtoError::EmptySequence));
    }

    #[test]
    fn test_current_and_advance() {
        let mut stream = TokenStream::new(vec![Token::Colon, Token::Comma]).unwrap();

        assert_eq!(stream.current().unwrap(), &Token::Colon);
        stream.advance();
        assert_eq!(stream.current().unwrap(), &Token::Comma);
        assert_eq!(stream.position(), 1);
        assert!(!stream.is_at_end());
    }

    #[test]
    fn test_exhausted_stream() {
        let mut stream = TokenStream::new(vec![Token::Colon]).unwrap();

        stream.advance();
        assert!(stream.is_at_end());
        assert_eq!(stream.current().err(), Some(ProtoError::out_of_bounds(1, 1)));

        // Advancing past the end stays put
        stream.advance();
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn test_len_and_tokens() {
        let stream = TokenStream::new(vec![Token::Equal, Token::Arrow]).unwrap();
        assert_eq!(stream.len(), 2);
        assert_eq!(stream.tokens(), &[Token::Equal, Token::Arrow]);
    }
}
