//! # Protomock
//!
//! A front end for a small subset of a statically-typed, curly-brace
//! declaration language: protocol declarations with member variables,
//! constants, and function signatures. The structured output is meant for
//! downstream code generation, such as emitting mock implementations of a
//! declared protocol.
//!
//! ## Architecture
//!
//! The front end is organized into several modules:
//! - `lexer`: Tokenization of declaration source code
//! - `parser`: Token stream cursor and the type annotation parser
//! - `error`: Error handling and diagnostics
//!
//! The lexer is permissive and never fails; the parsers are strict and
//! fail fast on the first malformed construct.

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use error::{Diagnostic, ProtoError, ProtoResult};
pub use lexer::{Lexer, Token};
pub use parser::{TokenStream, TypeDescriptor, TypeParser};

/// Version of the protomock front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a single type annotation from source text
///
/// This is the end-to-end convenience entry for the front end. It performs
/// lexical analysis, wraps the tokens in a stream, and parses one type
/// annotation, leaving any trailing tokens unconsumed.
///
/// # Arguments
///
/// * `source` - The type annotation source, e.g. `"[String?]?"`
///
/// # Returns
///
/// Returns the parsed `TypeDescriptor`, or a `ProtoError` if the source
/// lexes to zero tokens or does not start with a well-formed type.
pub fn parse_type_annotation(source: &str) -> ProtoResult<TypeDescriptor> {
    // Phase 1: Lexical Analysis
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();

    // Phase 2: Parsing
    let mut stream = TokenStream::new(tokens)?;
    TypeParser::new(&mut stream).parse()
}
