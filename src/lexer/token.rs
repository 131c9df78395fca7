//! Token definitions for protocol declarations
//!
//! This module defines all token types used in lexical analysis.

use std::fmt;

/// A token in a protocol declaration
///
/// Tokens are immutable values compared structurally: two identifiers are
/// equal iff their names are equal, every other variant compares by tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A named identifier; the name is never empty
    Identifier(String),

    // Keywords
    Protocol,   // protocol
    Variable,   // var
    Constant,   // let
    Function,   // func
    Throws,     // throws

    // Punctuation
    Arrow,          // ->
    Colon,          // :
    Comma,          // ,
    QuestionMark,   // ?
    Equal,          // =
    LessThan,       // <
    GreaterThan,    // >
    LeftCurly,      // {
    RightCurly,     // }
    LeftParen,      // (
    RightParen,     // )
    LeftSquare,     // [
    RightSquare,    // ]
}

impl Token {
    /// Get the keyword token for a scanned name, if it is one
    pub fn keyword(name: &str) -> Option<Token> {
        match name {
            "protocol" => Some(Self::Protocol),
            "var" => Some(Self::Variable),
            "let" => Some(Self::Constant),
            "func" => Some(Self::Function),
            "throws" => Some(Self::Throws),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{}", name),
            Self::Protocol => write!(f, "protocol"),
            Self::Variable => write!(f, "var"),
            Self::Constant => write!(f, "let"),
            Self::Function => write!(f, "func"),
            Self::Throws => write!(f, "throws"),
            Self::Arrow => write!(f, "->"),
            Self::Colon => write!(f, ":"),
            Self::Comma => write!(f, ","),
            Self::QuestionMark => write!(f, "?"),
            Self::Equal => write!(f, "="),
            Self::LessThan => write!(f, "<"),
            Self::GreaterThan => write!(f, ">"),
            Self::LeftCurly => write!(f, "{{"),
            Self::RightCurly => write!(f, "}}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftSquare => write!(f, "["),
            Self::RightSquare => write!(f, "]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(Token::keyword("protocol"), Some(Token::Protocol));
        assert_eq!(Token::keyword("var"), Some(Token::Variable));
        assert_eq!(Token::keyword("let"), Some(Token::Constant));
        assert_eq!(Token::keyword("func"), Some(Token::Function));
        assert_eq!(Token::keyword("throws"), Some(Token::Throws));
        assert_eq!(Token::keyword("Int"), None);
        assert_eq!(Token::keyword("Protocol"), None);
    }

    #[test]
    fn test_identifier_equality() {
        assert_eq!(
            Token::Identifier("x".to_string()),
            Token::Identifier("x".to_string())
        );
        assert_ne!(
            Token::Identifier("x".to_string()),
            Token::Identifier("y".to_string())
        );
        assert_ne!(Token::Identifier("protocol".to_string()), Token::Protocol);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Arrow.to_string(), "->");
        assert_eq!(Token::LeftCurly.to_string(), "{");
        assert_eq!(Token::Identifier("Foo".to_string()).to_string(), "Foo");
        assert_eq!(Token::Constant.to_string(), "let");
    }
}
