//! Parsed declaration node definitions
//!
//! This module defines the structured output of the type parser.

use std::fmt;

/// Parsed representation of a type annotation
///
/// For array types the name is a synthesized bracketed string reflecting
/// the nesting, so an array of optional `x` has the name `"[x?]"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Display name of the type
    pub name: String,
    /// Whether the annotation carries a trailing '?'
    pub is_optional: bool,
}

impl TypeDescriptor {
    /// Create a new type descriptor
    pub fn new(name: impl Into<String>, is_optional: bool) -> Self {
        Self {
            name: name.into(),
            is_optional,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_optional {
            write!(f, "{}?", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
