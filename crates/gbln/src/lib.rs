//! GBLN: bounded, strongly-typed interchange values for dynamic data.
//!
//! [`Gbln`] is the entry point. It owns the [`Engine`] that parses and
//! prints interchange text and composes the converter, the serialisation
//! profiles and the file layer behind one set of methods.
//!
//! ```no_run
//! use gbln::{Gbln, Native};
//!
//! # fn main() -> gbln::Result<()> {
//! let gbln = Gbln::new();
//! let user = Native::map([("name", Native::from("Alice")), ("age", Native::from(25))]);
//! assert_eq!(gbln.serialise_compact(&user)?, "{name<s64>(Alice)age<u8>(25)}");
//! gbln.write_file("user.gbln.xz".as_ref(), &user, None)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub use gbln_core::config::{MAX_COMPRESSION_LEVEL, MAX_INDENT};
pub use gbln_core::{
    encode_float, encode_int, encode_str, select_int, select_str, BoundedStr, ConfigError, Engine,
    Error, ErrorKind, Object, ParseError, Profile, ProfileSpec, Result, SerialiseError, StrTier,
    TextEngine, TypeTag, ValidationError, Value, COMPRESSED_SUFFIX, FILE_EXTENSION,
};
pub use gbln_interchange::{Key, Native};
pub use gbln_io::{savings_percent, SizeComparison};

/// Indent used by [`Gbln::serialise_pretty`] when none is given.
pub const DEFAULT_INDENT: u32 = 2;

/// A GBLN context bound to one engine.
#[derive(Debug, Clone, Default)]
pub struct Gbln<E: Engine = TextEngine> {
    engine: E,
}

impl Gbln<TextEngine> {
    /// A context using the built-in text engine.
    pub fn new() -> Self {
        Gbln { engine: TextEngine }
    }
}

impl<E: Engine> Gbln<E> {
    pub fn with_engine(engine: E) -> Self {
        Gbln { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Classify a native value into a value-model tree.
    pub fn encode(&self, native: &Native) -> Result<Value> {
        gbln_interchange::encode(native)
    }

    /// Turn a value-model tree back into a native value.
    pub fn decode(&self, value: &Value) -> Result<Native> {
        gbln_interchange::decode(value)
    }

    /// Parse interchange text into a native value.
    pub fn parse(&self, text: &str) -> Result<Native> {
        self.decode(&self.parse_value(text)?)
    }

    /// Parse interchange text, keeping the typed tree.
    pub fn parse_value(&self, text: &str) -> Result<Value> {
        Ok(self.engine.parse(text)?)
    }

    /// Read and parse a file, keeping the typed tree. Compressed files are
    /// recognised by name.
    pub fn parse_file(&self, path: &Path) -> Result<Value> {
        gbln_io::read_value(&self.engine, path)
    }

    /// Encode and print with `profile`, or the I/O preset when `None`.
    pub fn serialise(&self, native: &Native, profile: Option<&Profile>) -> Result<String> {
        let profile = profile.copied().unwrap_or_default();
        Ok(self.engine.print(&self.encode(native)?, &profile))
    }

    pub fn serialise_compact(&self, native: &Native) -> Result<String> {
        Ok(self.engine.print_compact(&self.encode(native)?))
    }

    /// Indented text; `indent` defaults to [`DEFAULT_INDENT`] and must not
    /// exceed [`MAX_INDENT`].
    pub fn serialise_pretty(&self, native: &Native, indent: Option<u32>) -> Result<String> {
        let indent = indent.unwrap_or(DEFAULT_INDENT);
        if indent > MAX_INDENT {
            return Err(ConfigError::Indent(indent).into());
        }
        Ok(self.engine.print_pretty(&self.encode(native)?, indent as u8))
    }

    pub fn read_file(&self, path: &Path) -> Result<Native> {
        gbln_io::read_file(&self.engine, path)
    }

    /// Write `native` to `path`; compression follows the file name.
    pub fn write_file(&self, path: &Path, native: &Native, profile: Option<&Profile>) -> Result<()> {
        gbln_io::write_file(&self.engine, path, native, profile)
    }

    /// Print an already typed tree to `path` without re-classifying it.
    pub fn write_value(&self, path: &Path, value: &Value, profile: Option<&Profile>) -> Result<()> {
        let profile = profile.copied().unwrap_or_default();
        gbln_io::write_value(&self.engine, path, value, &profile)
    }

    /// Read a JSON document as a native value.
    pub fn read_json(&self, path: &Path) -> Result<Native> {
        gbln_io::read_json_file(path)
    }

    pub fn convert_from_json(
        &self,
        json_path: &Path,
        gbln_path: &Path,
        profile: Option<&Profile>,
    ) -> Result<()> {
        gbln_io::convert_from_json(&self.engine, json_path, gbln_path, profile)
    }

    pub fn convert_to_json(&self, gbln_path: &Path, json_path: &Path, pretty: bool) -> Result<()> {
        gbln_io::convert_to_json(&self.engine, gbln_path, json_path, pretty)
    }

    pub fn is_valid(&self, text: &str) -> bool {
        self.engine.is_valid(text)
    }

    /// Encode, print, re-parse and decode `native` in both compact and
    /// pretty form; `Ok(true)` when every pass reproduces the input.
    ///
    /// Values that cannot be encoded at all are errors, not mismatches.
    pub fn verify_round_trip(&self, native: &Native) -> Result<bool> {
        let value = self.encode(native)?;
        for text in [
            self.engine.print_compact(&value),
            self.engine.print_pretty(&value, DEFAULT_INDENT as u8),
        ] {
            let back = self.decode(&self.engine.parse(&text)?)?;
            if &back != native {
                tracing::debug!(text = %text, "round trip changed the value");
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn compare_sizes(&self, native: &Native) -> Result<SizeComparison> {
        gbln_io::compare_sizes(&self.engine, native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_indent_is_validated() {
        let gbln = Gbln::new();
        let native = Native::map([("a", 1)]);
        assert_eq!(gbln.serialise_pretty(&native, None).unwrap(), "{\n  a<u8>(1)\n}\n");
        assert_eq!(gbln.serialise_pretty(&native, Some(0)).unwrap(), "{\na<u8>(1)\n}\n");
        let err = gbln.serialise_pretty(&native, Some(9)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn serialise_defaults_to_compact() {
        let gbln = Gbln::new();
        let native = Native::seq([true, false]);
        assert_eq!(gbln.serialise(&native, None).unwrap(), "[<b>(t)<b>(f)]");
        assert_eq!(
            gbln.serialise(&native, Some(&Profile::source_default())).unwrap(),
            "[\n  <b>(t)\n  <b>(f)\n]\n"
        );
    }

    #[test]
    fn round_trip_mismatch_is_reported_not_raised() {
        let gbln = Gbln::new();
        assert!(gbln.verify_round_trip(&Native::map([("x", 1.5)])).unwrap());
        // An empty map comes back as an empty sequence.
        assert!(!gbln.verify_round_trip(&Native::Map(vec![])).unwrap());
        // NaN never compares equal to itself.
        assert!(!gbln.verify_round_trip(&Native::Float(f64::NAN)).unwrap());
        assert!(gbln.verify_round_trip(&Native::Bytes(vec![])).is_err());
    }
}
