//! Lexical analysis module
//!
//! This module handles tokenization of protocol declaration source code.

pub mod scanner;
pub mod token;

pub use scanner::Lexer;
pub use token::Token;
