//! Type annotation parser
//!
//! This module parses a single type annotation out of a token stream:
//! a bare name, an optional suffix, or an array with arbitrary nesting.

use super::ast::TypeDescriptor;
use super::token_stream::TokenStream;
use crate::error::{ProtoError, ProtoResult};
use crate::lexer::Token;

/// Recursive-descent parser for type annotations
///
/// On success the stream is left on the first token after the consumed
/// type; validating that trailing context is up to the caller.
pub struct TypeParser<'a> {
    stream: &'a mut TokenStream,
}

impl<'a> TypeParser<'a> {
    /// Create a new type parser over a stream
    pub fn new(stream: &'a mut TokenStream) -> Self {
        Self { stream }
    }

    /// Parse one full type annotation
    pub fn parse(&mut self) -> ProtoResult<TypeDescriptor> {
        let token = self.stream.current()?.clone();

        match token {
            Token::LeftSquare => self.parse_array(),
            Token::Identifier(name) => {
                self.stream.advance();
                let is_optional = self.match_question_mark();
                Ok(TypeDescriptor::new(name, is_optional))
            }
            other => Err(ProtoError::invalid_name(other.to_string())),
        }
    }

    /// Parse an array type, with the stream on the opening '['
    fn parse_array(&mut self) -> ProtoResult<TypeDescriptor> {
        self.stream.advance();

        let element = self.parse()?;

        // An exhausted stream here is the same missing bracket
        match self.stream.current() {
            Ok(Token::RightSquare) => {}
            _ => return Err(ProtoError::MissingEndingBracket),
        }
        self.stream.advance();

        let is_optional = self.match_question_mark();

        // The element's own optionality is embedded in the synthesized name
        Ok(TypeDescriptor::new(format!("[{}]", element), is_optional))
    }

    /// Consume a trailing '?' if present
    fn match_question_mark(&mut self) -> bool {
        if matches!(self.stream.current(), Ok(Token::QuestionMark)) {
            self.stream.advance();
            true
        } else {
            false
        }
    }
}
