//! Lexer/Scanner implementation for protocol declarations
//!
//! This module implements lexical analysis, converting declaration source
//! code into tokens. The lexer is permissive and never fails: malformed
//! input yields fewer or different tokens, and well-formedness is checked
//! by the parsers downstream.

use super::token::Token;

/// Lexer for protocol declaration source code
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    current: usize,
}

/// Characters allowed inside a scanned name
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str) -> Self {
        let mut source: Vec<char> = source.chars().collect();
        // Trailing pad so a name ending exactly at end-of-input still flushes
        source.push(' ');
        Self {
            source,
            tokens: Vec::new(),
            current: 0,
        }
    }

    /// Tokenize the source code
    pub fn tokenize(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.clone()
    }

    /// Scan a single token
    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            // Single-character punctuation
            ':' => self.add_token(Token::Colon),
            '{' => self.add_token(Token::LeftCurly),
            '}' => self.add_token(Token::RightCurly),
            '(' => self.add_token(Token::LeftParen),
            ')' => self.add_token(Token::RightParen),
            '[' => self.add_token(Token::LeftSquare),
            ']' => self.add_token(Token::RightSquare),
            '=' => self.add_token(Token::Equal),
            '?' => self.add_token(Token::QuestionMark),
            ',' => self.add_token(Token::Comma),
            '<' => self.add_token(Token::LessThan),
            '>' => self.add_token(Token::GreaterThan),

            // '->' is an arrow; a lone '-' is dropped silently
            '-' => {
                if self.match_char('>') {
                    self.add_token(Token::Arrow);
                }
            }

            // '_' on its own is the placeholder name
            '_' => self.add_token(Token::Identifier("_".to_string())),

            // Identifiers and keywords, plus backtick-quoted identifiers
            c if c.is_ascii_alphabetic() || c == '`' => self.scan_name(c),

            // Anything else (whitespace included) is skipped
            _ => {}
        }
    }

    /// Scan an identifier or keyword starting at `first`
    ///
    /// A name opened by a backtick is emitted as a literal identifier when
    /// the closing backtick is found, bypassing keyword classification. An
    /// unterminated backtick quote falls back to normal classification.
    fn scan_name(&mut self, first: char) {
        let mut buffer = String::new();
        let end_quote_required = first == '`';

        if !end_quote_required {
            buffer.push(first);
        }

        while is_name_char(self.peek()) {
            buffer.push(self.advance());
        }

        // An empty buffer never becomes a token
        if buffer.is_empty() {
            if end_quote_required && self.peek() == '`' {
                self.advance();
            }
            return;
        }

        if end_quote_required && self.peek() == '`' {
            self.advance();
            self.add_token(Token::Identifier(buffer));
        } else {
            let token = match Token::keyword(&buffer) {
                Some(keyword) => keyword,
                None => Token::Identifier(buffer),
            };
            self.add_token(token);
        }
    }

    /// Add a token to the token list
    fn add_token(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Advance to the next character
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Check if the next character matches and consume it if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
