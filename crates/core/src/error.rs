//! Error taxonomy shared by every GBLN crate.
//!
//! Each failure belongs to exactly one [`ErrorKind`]. Context wrappers
//! ([`Error::At`], [`Error::File`]) add a location without replacing the
//! underlying cause.

use std::fmt;
use std::path::PathBuf;

use crate::value::TypeTag;

/// The five error kinds callers dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse,
    Validation,
    Io,
    Serialise,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Validation => "validation",
            ErrorKind::Io => "io",
            ErrorKind::Serialise => "serialise",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}

/// Malformed interchange (or JSON) text. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {message}")]
pub struct ParseError {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl ParseError {
    pub fn new(line: u32, column: u32, message: impl Into<String>) -> Self {
        ParseError {
            line,
            column,
            message: message.into(),
        }
    }
}

/// A value that violates the bounds of the value model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A typed extraction or constructor was applied to the wrong tag.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: TypeTag, found: TypeTag },

    /// An object already holds this key.
    #[error("duplicate object key '{key}'")]
    DuplicateKey { key: String },

    /// An integer outside both the u64 and i64 ranges.
    #[error("integer {value} is outside the 64-bit range")]
    IntegerOutOfRange { value: i128 },

    /// An integer that does not fit the width it was declared with.
    #[error("integer {value} does not fit {tag}")]
    WidthOverflow { value: i128, tag: TypeTag },

    /// A string longer than the largest (or the requested) tier.
    #[error("string has {chars} characters, maximum is {max}")]
    StringTooLong { chars: usize, max: usize },

    /// Containers nested deeper than the text parser accepts.
    #[error("nesting deeper than {max} levels")]
    NestingTooDeep { max: usize },

    /// `push`/`insert` applied to a value that is not the right container.
    #[error("cannot {operation} into {found}")]
    NotAContainer {
        operation: &'static str,
        found: TypeTag,
    },
}

/// A value that cannot be turned into output text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SerialiseError {
    /// A native shape with no counterpart in the value model.
    #[error("unsupported native type: {shape}")]
    UnsupportedType { shape: String },

    /// JSON has no spelling for NaN or infinities.
    #[error("non-finite float {value} cannot be written as JSON")]
    NonFiniteFloat { value: String },

    /// JSON numbers are limited to the i64/u64 range here.
    #[error("integer {value} cannot be written as JSON")]
    IntegerOutOfJsonRange { value: i128 },

    /// The JSON encoder itself failed.
    #[error("JSON encoding failed: {0}")]
    Json(String),
}

/// A serialisation profile field outside its declared range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("compression level {0} is outside 0..=9")]
    CompressionLevel(u32),

    #[error("indent {0} is outside 0..=8")]
    Indent(u32),

    #[error("unknown profile preset '{0}' (expected 'io' or 'source')")]
    UnknownPreset(String),
}

/// Umbrella error returned by every fallible GBLN operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("serialise error: {0}")]
    Serialise(#[from] SerialiseError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A conversion failure at a position inside a value, e.g. `$.user.name`.
    #[error("at {path}: {source}")]
    At {
        path: String,
        #[source]
        source: Box<Error>,
    },

    /// A failure while reading or writing a file.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// The kind of the underlying cause, looking through context wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(_) => ErrorKind::Parse,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Serialise(_) => ErrorKind::Serialise,
            Error::Config(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
            Error::At { source, .. } | Error::File { source, .. } => source.kind(),
        }
    }

    /// Attach a value path. An error that already carries one is left alone
    /// so the innermost (most precise) position wins.
    pub fn at(self, path: impl Into<String>) -> Self {
        match self {
            Error::At { .. } => self,
            other => Error::At {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// Attach the file path an I/O-layer operation was working on.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Error::File {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with every context wrapper removed.
    pub fn root(&self) -> &Error {
        match self {
            Error::At { source, .. } | Error::File { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_looks_through_wrappers() {
        let err = Error::from(ValidationError::StringTooLong {
            chars: 1025,
            max: 1024,
        })
        .at("$.name")
        .in_file("data.gbln");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(
            err.root(),
            Error::Validation(ValidationError::StringTooLong { chars: 1025, .. })
        ));
    }

    #[test]
    fn innermost_path_is_kept() {
        let err = Error::from(ValidationError::IntegerOutOfRange { value: -1 })
            .at("$.a.b")
            .at("$.a");
        assert_eq!(
            err.to_string(),
            "at $.a.b: validation error: integer -1 is outside the 64-bit range"
        );
    }

    #[test]
    fn file_context_keeps_source_chain() {
        use std::error::Error as _;
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::from(io).in_file("nope.gbln");
        assert!(err.to_string().starts_with("nope.gbln: "));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.source().is_some());
    }
}
