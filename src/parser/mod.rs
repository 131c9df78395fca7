//! Parser module
//!
//! This module handles parsing a token stream into structured declaration
//! nodes. The type parser here is the sub-routine a declaration-level
//! parser uses to consume `name: Type` annotations.

pub mod ast;
pub mod token_stream;
pub mod type_parser;

pub use ast::TypeDescriptor;
pub use token_stream::TokenStream;
pub use type_parser::TypeParser;
