//! The value-model engine seam.
//!
//! Converters and the file layer only ever talk to an [`Engine`], so an
//! alternative text notation (or a foreign library) can be plugged in
//! without touching them. [`TextEngine`] is the built-in implementation.
//!
//! Trees and text are plain owned values: whatever an engine hands back is
//! released when the caller drops it, on success and error paths alike.

use crate::config::Profile;
use crate::error::ParseError;
use crate::value::Value;
use crate::{parser, printer};

/// Parse and print operations over the value model.
pub trait Engine {
    /// Parse interchange text into a value tree.
    fn parse(&self, text: &str) -> Result<Value, ParseError>;

    /// Whitespace-free text.
    fn print_compact(&self, value: &Value) -> String;

    /// Human-formatted text indented by `indent` spaces per level.
    fn print_pretty(&self, value: &Value, indent: u8) -> String;

    /// Print according to a profile's formatting fields.
    fn print(&self, value: &Value, profile: &Profile) -> String {
        if profile.compact() {
            self.print_compact(value)
        } else {
            self.print_pretty(value, profile.indent())
        }
    }

    fn is_valid(&self, text: &str) -> bool {
        self.parse(text).is_ok()
    }
}

/// The built-in engine for the `<tag>(payload)` text notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextEngine;

impl Engine for TextEngine {
    fn parse(&self, text: &str) -> Result<Value, ParseError> {
        let result = parser::parse(text);
        if let Err(e) = &result {
            tracing::debug!(bytes = text.len(), error = %e, "rejected interchange text");
        }
        result
    }

    fn print_compact(&self, value: &Value) -> String {
        printer::print_compact(value)
    }

    fn print_pretty(&self, value: &Value, indent: u8) -> String {
        printer::print_pretty(value, indent)
    }
}
