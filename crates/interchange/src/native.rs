//! Native dynamic values: the host-side shape data arrives in before it
//! is classified into bounded value-model types.

use std::borrow::Cow;
use std::fmt;

/// A dynamically-typed host value.
///
/// Integers are carried as `i128` so that every `u64` and `i64`, and
/// values outside both, can be expressed and then classified (or rejected)
/// by the converter.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    Text(String),
    /// Ordered, densely indexed sequence.
    Seq(Vec<Native>),
    /// Keyed collection in iteration order. Keys may repeat here; the
    /// converter rejects repeats. Unless the keys are exactly `0..n` in
    /// order (which encodes as an array), integer keys are stored as text
    /// and decode back as [`Key::Text`].
    Map(Vec<(Key, Native)>),
    /// Raw bytes have no value-model counterpart and are always rejected.
    Bytes(Vec<u8>),
}

/// Key of a [`Native::Map`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i128),
    Text(String),
}

impl Key {
    /// The key as object-key text.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Key::Int(n) => Cow::Owned(n.to_string()),
            Key::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n.into())
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Int(n as i128)
    }
}

impl Native {
    /// Build a map from key/value pairs, keeping their order.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Native
    where
        K: Into<Key>,
        V: Into<Native>,
    {
        Native::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence, keeping element order.
    pub fn seq<V: Into<Native>>(items: impl IntoIterator<Item = V>) -> Native {
        Native::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Short name of the runtime shape, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Native::Null => "null",
            Native::Bool(_) => "bool",
            Native::Int(_) => "int",
            Native::Float(_) => "float",
            Native::Text(_) => "text",
            Native::Seq(_) => "sequence",
            Native::Map(_) => "map",
            Native::Bytes(_) => "bytes",
        }
    }

    /// First value stored under a text key of a map.
    pub fn get(&self, key: &str) -> Option<&Native> {
        match self {
            Native::Map(entries) => entries
                .iter()
                .find(|(k, _)| k.as_text() == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<bool> for Native {
    fn from(b: bool) -> Self {
        Native::Bool(b)
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Native {
                fn from(n: $t) -> Self {
                    Native::Int(n as i128)
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize, isize);

impl From<f32> for Native {
    fn from(f: f32) -> Self {
        Native::Float(f.into())
    }
}

impl From<f64> for Native {
    fn from(f: f64) -> Self {
        Native::Float(f)
    }
}

impl From<&str> for Native {
    fn from(s: &str) -> Self {
        Native::Text(s.to_string())
    }
}

impl From<String> for Native {
    fn from(s: String) -> Self {
        Native::Text(s)
    }
}

impl<T: Into<Native>> From<Vec<T>> for Native {
    fn from(items: Vec<T>) -> Self {
        Native::seq(items)
    }
}

impl<T: Into<Native>> From<Option<T>> for Native {
    fn from(v: Option<T>) -> Self {
        v.map_or(Native::Null, Into::into)
    }
}
