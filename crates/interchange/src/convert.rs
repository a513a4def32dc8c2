//! Bidirectional conversion between [`Native`] values and value-model trees.
//!
//! Encoding classifies every leaf through the narrowest-type selector and
//! decides array-vs-object purely from the collection's shape: a map whose
//! keys are exactly the integers `0..n` in order becomes an array, as does
//! an empty map. Decoding dispatches on the tree's type tag and reads every
//! leaf through its typed extractor.

use std::borrow::Cow;
use std::fmt;

use gbln_core::parser::MAX_DEPTH;
use gbln_core::{
    encode_float, encode_int, encode_str, Error, Object, SerialiseError, StrTier, TypeTag,
    ValidationError, Value,
};

use crate::native::{Key, Native};

/// Convert a native value into a value-model tree. The first offending
/// leaf aborts the conversion; the error names its position.
pub fn encode(native: &Native) -> Result<Value, Error> {
    let mut path = ValuePath::default();
    encode_at(native, &mut path).inspect_err(|e| tracing::debug!(error = %e, "native value rejected"))
}

/// Convert a value-model tree back into a native value.
pub fn decode(value: &Value) -> Result<Native, Error> {
    let native = match value.type_tag() {
        TypeTag::I8 => Native::Int(value.as_i8()?.into()),
        TypeTag::I16 => Native::Int(value.as_i16()?.into()),
        TypeTag::I32 => Native::Int(value.as_i32()?.into()),
        TypeTag::I64 => Native::Int(value.as_i64()?.into()),
        TypeTag::U8 => Native::Int(value.as_u8()?.into()),
        TypeTag::U16 => Native::Int(value.as_u16()?.into()),
        TypeTag::U32 => Native::Int(value.as_u32()?.into()),
        TypeTag::U64 => Native::Int(value.as_u64()?.into()),
        TypeTag::F32 => Native::Float(value.as_f32()?.into()),
        TypeTag::F64 => Native::Float(value.as_f64()?),
        TypeTag::S64 => Native::Text(value.as_str(StrTier::S64)?.to_owned()),
        TypeTag::S256 => Native::Text(value.as_str(StrTier::S256)?.to_owned()),
        TypeTag::S1024 => Native::Text(value.as_str(StrTier::S1024)?.to_owned()),
        TypeTag::Bool => Native::Bool(value.as_bool()?),
        TypeTag::Null => {
            value.as_null()?;
            Native::Null
        }
        TypeTag::Array => Native::Seq(
            value
                .as_array()?
                .iter()
                .map(decode)
                .collect::<Result<_, _>>()?,
        ),
        TypeTag::Object => Native::Map(
            value
                .as_object()?
                .iter()
                .map(|(k, v)| Ok((Key::Text(k.to_owned()), decode(v)?)))
                .collect::<Result<_, Error>>()?,
        ),
    };
    Ok(native)
}

/// `true` when the map's keys are exactly `0, 1, .., n-1` in that order.
/// Empty maps count as dense.
pub fn is_dense(entries: &[(Key, Native)]) -> bool {
    entries
        .iter()
        .enumerate()
        .all(|(i, (k, _))| matches!(k, Key::Int(n) if *n == i as i128))
}

fn encode_at<'a>(native: &'a Native, path: &mut ValuePath<'a>) -> Result<Value, Error> {
    // Same limit as the parser, so everything written can be read back.
    if path.depth() > MAX_DEPTH {
        return Err(
            Error::from(ValidationError::NestingTooDeep { max: MAX_DEPTH }).at(path.to_string())
        );
    }
    match native {
        Native::Null => Ok(Value::Null),
        Native::Bool(b) => Ok(Value::Bool(*b)),
        Native::Int(n) => encode_int(*n).map_err(|e| Error::from(e).at(path.to_string())),
        Native::Float(f) => Ok(encode_float(*f)),
        Native::Text(s) => encode_str(s.as_str()).map_err(|e| Error::from(e).at(path.to_string())),
        Native::Seq(items) => encode_items(items.iter(), path),
        Native::Map(entries) if is_dense(entries) => {
            encode_items(entries.iter().map(|(_, v)| v), path)
        }
        Native::Map(entries) => {
            let mut obj = Object::with_capacity(entries.len());
            for (key, v) in entries {
                let key = key.as_text();
                path.push(Segment::Key(key.clone()));
                let value = encode_at(v, path)?;
                let inserted = obj
                    .insert(key.into_owned(), value)
                    .map_err(|e| Error::from(e).at(path.to_string()));
                path.pop();
                inserted?;
            }
            Ok(Value::Object(obj))
        }
        Native::Bytes(_) => Err(Error::from(SerialiseError::UnsupportedType {
            shape: native.shape().to_string(),
        })
        .at(path.to_string())),
    }
}

fn encode_items<'a>(
    items: impl Iterator<Item = &'a Native>,
    path: &mut ValuePath<'a>,
) -> Result<Value, Error> {
    let mut out = Vec::new();
    for (i, item) in items.enumerate() {
        path.push(Segment::Index(i));
        let value = encode_at(item, path);
        path.pop();
        out.push(value?);
    }
    Ok(Value::Array(out))
}

// ──────────────────────────────────────────────
// Value paths for error messages
// ──────────────────────────────────────────────

enum Segment<'a> {
    Key(Cow<'a, str>),
    Index(usize),
}

/// Position inside a value, rendered as `$`, `$.user.name`, `$.tags[2]`.
#[derive(Default)]
struct ValuePath<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> ValuePath<'a> {
    fn push(&mut self, segment: Segment<'a>) {
        self.segments.push(segment);
    }

    fn pop(&mut self) {
        self.segments.pop();
    }

    fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for ValuePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(k) if is_plain_key(k) => write!(f, ".{}", k)?,
                Segment::Key(k) => write!(f, "[{:?}]", k)?,
                Segment::Index(i) => write!(f, "[{}]", i)?,
            }
        }
        Ok(())
    }
}

fn is_plain_key(k: &str) -> bool {
    !k.is_empty() && k.chars().all(|c| c.is_alphanumeric() || c == '_')
}
