//! JSON interoperability.
//!
//! JSON enters through [`Native`] so that its numbers and strings go through
//! the same narrowest-type selection as any other host value. `serde_json`
//! is built with `preserve_order`, so object key order survives both ways.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Number;

use gbln_core::{Error, ParseError, SerialiseError, ValidationError, Value};

use crate::convert::{decode, encode};
use crate::native::{Key, Native};

impl From<serde_json::Value> for Native {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Native::Null,
            serde_json::Value::Bool(b) => Native::Bool(b),
            serde_json::Value::Number(n) => number_to_native(&n),
            serde_json::Value::String(s) => Native::Text(s),
            serde_json::Value::Array(items) => {
                Native::Seq(items.into_iter().map(Native::from).collect())
            }
            serde_json::Value::Object(map) => Native::Map(
                map.into_iter()
                    .map(|(k, v)| (Key::Text(k), Native::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_to_native(n: &Number) -> Native {
    if let Some(u) = n.as_u64() {
        Native::Int(u.into())
    } else if let Some(i) = n.as_i64() {
        Native::Int(i.into())
    } else {
        Native::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Convert a native value to JSON. Keys become strings; non-finite floats,
/// integers outside i64/u64 and raw bytes have no JSON spelling.
pub fn to_json(native: &Native) -> Result<serde_json::Value, Error> {
    let json = match native {
        Native::Null => serde_json::Value::Null,
        Native::Bool(b) => serde_json::Value::Bool(*b),
        Native::Int(n) => {
            let number = if let Ok(i) = i64::try_from(*n) {
                Number::from(i)
            } else if let Ok(u) = u64::try_from(*n) {
                Number::from(u)
            } else {
                return Err(SerialiseError::IntegerOutOfJsonRange { value: *n }.into());
            };
            serde_json::Value::Number(number)
        }
        Native::Float(f) => {
            let number = Number::from_f64(*f).ok_or_else(|| SerialiseError::NonFiniteFloat {
                value: f.to_string(),
            })?;
            serde_json::Value::Number(number)
        }
        Native::Text(s) => serde_json::Value::String(s.clone()),
        Native::Seq(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect::<Result<_, _>>()?)
        }
        Native::Map(entries) => {
            let mut map = serde_json::Map::with_capacity(entries.len());
            for (k, v) in entries {
                let key = k.to_string();
                if map.contains_key(&key) {
                    return Err(ValidationError::DuplicateKey { key }.into());
                }
                map.insert(key, to_json(v)?);
            }
            serde_json::Value::Object(map)
        }
        Native::Bytes(_) => {
            return Err(SerialiseError::UnsupportedType {
                shape: native.shape().to_string(),
            }
            .into())
        }
    };
    Ok(json)
}

/// Map a `serde_json` failure onto the error taxonomy: syntax and EOF
/// errors are parse errors, everything else is a conversion failure.
pub fn json_error(e: serde_json::Error) -> Error {
    use serde_json::error::Category;
    match e.classify() {
        Category::Syntax | Category::Eof => {
            ParseError::new(e.line() as u32, e.column() as u32, e.to_string()).into()
        }
        Category::Io => Error::Io(e.into()),
        Category::Data => SerialiseError::Json(e.to_string()).into(),
    }
}

/// JSON text to a value-model tree.
pub fn value_from_json_str(text: &str) -> Result<Value, Error> {
    let json: serde_json::Value = serde_json::from_str(text).map_err(json_error)?;
    encode(&Native::from(json))
}

/// Value-model tree to JSON text.
pub fn value_to_json_string(value: &Value, pretty: bool) -> Result<String, Error> {
    let json = to_json(&decode(value)?)?;
    let text = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    text.map_err(json_error)
}

impl Native {
    /// Capture any serde-serialisable value as a native value.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Native, Error> {
        serde_json::to_value(value)
            .map(Native::from)
            .map_err(json_error)
    }

    /// Rebuild a serde-deserialisable value from this native value.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_value(to_json(self)?).map_err(json_error)
    }
}
