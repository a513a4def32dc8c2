//! gbln-core: the GBLN value model and its text engine.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`Value`], [`Object`], [`BoundedStr`], [`TypeTag`], [`StrTier`] -- the value model
//! - [`select_int`], [`select_str`] and the `encode_*` helpers -- narrowest-type selection
//! - [`Profile`], [`ProfileSpec`] -- validated serialisation profiles
//! - [`Engine`], [`TextEngine`] -- parse/print seam and its built-in implementation
//! - [`Error`], [`ErrorKind`] and the per-kind error types

/// Extension of a plain interchange file.
pub const FILE_EXTENSION: &str = "gbln";
/// Suffix appended to the extension of an xz-compressed file.
pub const COMPRESSED_SUFFIX: &str = ".xz";

pub mod config;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod select;
pub mod value;

// ── Convenience re-exports ───────────────────────────────────────────

pub use config::{Profile, ProfileSpec};
pub use engine::{Engine, TextEngine};
pub use error::{
    ConfigError, Error, ErrorKind, ParseError, Result, SerialiseError, ValidationError,
};
pub use select::{encode_float, encode_int, encode_str, select_int, select_str};
pub use value::{BoundedStr, Object, StrTier, TypeTag, Value};
