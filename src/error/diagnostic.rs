//! Diagnostic formatting for better error messages
//!
//! This module provides utilities for formatting front-end errors with
//! token stream context.

use super::ProtoError;
use crate::lexer::Token;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    error: ProtoError,
    tokens: Option<(Vec<Token>, usize)>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: ProtoError) -> Self {
        Self {
            error,
            tokens: None,
        }
    }

    /// Create a diagnostic with the token stream and the failing position
    pub fn with_tokens(error: ProtoError, tokens: &[Token], position: usize) -> Self {
        Self {
            error,
            tokens: Some((tokens.to_vec(), position)),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        // Error header
        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.error.message());
        output.push('\n');

        if let Some((ref tokens, position)) = self.tokens {
            output.push_str(&format!(
                "  {} token {} of {}\n",
                "-->".blue().bold(),
                position,
                tokens.len()
            ));
            output.push_str(&self.format_token_context(tokens, position));
        }

        output
    }

    /// Format the rendered token stream with a caret under the failing token
    fn format_token_context(&self, tokens: &[Token], position: usize) -> String {
        let mut line = String::from("  | ");
        let mut caret_offset = line.len();

        for (index, token) in tokens.iter().enumerate() {
            if index == position {
                caret_offset = line.len();
            }
            line.push_str(&token.to_string());
            line.push(' ');
        }

        // Past-the-end positions point just after the last token
        if position >= tokens.len() {
            caret_offset = line.len();
        }

        let mut output = line;
        output.push('\n');
        output.push_str(&" ".repeat(caret_offset));
        output.push_str(&format!("{}\n", "^".red().bold()));
        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_without_tokens() {
        let err = ProtoError::MissingEndingBracket;
        let diag = Diagnostic::new(err);

        let formatted = diag.format();
        assert!(formatted.contains("Type Parser Error"));
        assert!(formatted.contains("missing its ending ']'"));
    }

    #[test]
    fn test_diagnostic_with_tokens() {
        let tokens = vec![
            Token::LeftSquare,
            Token::Identifier("A".to_string()),
            Token::Colon,
        ];
        let err = ProtoError::MissingEndingBracket;
        let diag = Diagnostic::with_tokens(err, &tokens, 2);

        let formatted = diag.format();
        assert!(formatted.contains("token 2 of 3"));
        assert!(formatted.contains("[ A :"));
        assert!(formatted.contains('^'));
    }
}
