//! The bounded, strongly-typed value model.
//!
//! A [`Value`] is a tree of typed leaves (fixed-width integers and floats,
//! tier-bounded strings, booleans, null) inside arrays and ordered-key
//! objects. Every constructor validates its payload, so a `Value` that
//! exists is always within its declared bounds.

use std::fmt;
use std::str::FromStr;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::ValidationError;

// ──────────────────────────────────────────────
// Type tags
// ──────────────────────────────────────────────

/// The concrete type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    S64,
    S256,
    S1024,
    Bool,
    Null,
    Array,
    Object,
}

impl TypeTag {
    /// Integer tags in selection order: unsigned widths first, then signed.
    pub const UNSIGNED: [TypeTag; 4] = [TypeTag::U8, TypeTag::U16, TypeTag::U32, TypeTag::U64];
    pub const SIGNED: [TypeTag; 4] = [TypeTag::I8, TypeTag::I16, TypeTag::I32, TypeTag::I64];

    /// Name used in the text notation and in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::I8 => "i8",
            TypeTag::I16 => "i16",
            TypeTag::I32 => "i32",
            TypeTag::I64 => "i64",
            TypeTag::U8 => "u8",
            TypeTag::U16 => "u16",
            TypeTag::U32 => "u32",
            TypeTag::U64 => "u64",
            TypeTag::F32 => "f32",
            TypeTag::F64 => "f64",
            TypeTag::S64 => "s64",
            TypeTag::S256 => "s256",
            TypeTag::S1024 => "s1024",
            TypeTag::Bool => "b",
            TypeTag::Null => "n",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
        }
    }

    /// Inclusive range of an integer tag, `None` for every other tag.
    pub fn int_range(self) -> Option<(i128, i128)> {
        let range = match self {
            TypeTag::I8 => (i8::MIN as i128, i8::MAX as i128),
            TypeTag::I16 => (i16::MIN as i128, i16::MAX as i128),
            TypeTag::I32 => (i32::MIN as i128, i32::MAX as i128),
            TypeTag::I64 => (i64::MIN as i128, i64::MAX as i128),
            TypeTag::U8 => (0, u8::MAX as i128),
            TypeTag::U16 => (0, u16::MAX as i128),
            TypeTag::U32 => (0, u32::MAX as i128),
            TypeTag::U64 => (0, u64::MAX as i128),
            _ => return None,
        };
        Some(range)
    }

    pub fn is_integer(self) -> bool {
        self.int_range().is_some()
    }

    /// The string tier of a string tag.
    pub fn str_tier(self) -> Option<StrTier> {
        match self {
            TypeTag::S64 => Some(StrTier::S64),
            TypeTag::S256 => Some(StrTier::S256),
            TypeTag::S1024 => Some(StrTier::S1024),
            _ => None,
        }
    }

    pub fn is_container(self) -> bool {
        matches!(self, TypeTag::Array | TypeTag::Object)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses leaf tag names only; containers have no tag in the text notation.
impl FromStr for TypeTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s {
            "i8" => TypeTag::I8,
            "i16" => TypeTag::I16,
            "i32" => TypeTag::I32,
            "i64" => TypeTag::I64,
            "u8" => TypeTag::U8,
            "u16" => TypeTag::U16,
            "u32" => TypeTag::U32,
            "u64" => TypeTag::U64,
            "f32" => TypeTag::F32,
            "f64" => TypeTag::F64,
            "s64" => TypeTag::S64,
            "s256" => TypeTag::S256,
            "s1024" => TypeTag::S1024,
            "b" => TypeTag::Bool,
            "n" => TypeTag::Null,
            other => return Err(format!("unknown type tag '{}'", other)),
        };
        Ok(tag)
    }
}

// ──────────────────────────────────────────────
// Bounded strings
// ──────────────────────────────────────────────

/// Maximum character count class of a bounded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrTier {
    S64,
    S256,
    S1024,
}

impl StrTier {
    /// All tiers, smallest first.
    pub const ALL: [StrTier; 3] = [StrTier::S64, StrTier::S256, StrTier::S1024];

    pub fn max_chars(self) -> usize {
        match self {
            StrTier::S64 => 64,
            StrTier::S256 => 256,
            StrTier::S1024 => 1024,
        }
    }

    pub fn tag(self) -> TypeTag {
        match self {
            StrTier::S64 => TypeTag::S64,
            StrTier::S256 => TypeTag::S256,
            StrTier::S1024 => TypeTag::S1024,
        }
    }
}

/// A string whose character count (Unicode scalar values, not bytes) is
/// within its tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedStr {
    tier: StrTier,
    text: String,
}

impl BoundedStr {
    pub fn new(tier: StrTier, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        let chars = text.chars().count();
        if chars > tier.max_chars() {
            return Err(ValidationError::StringTooLong {
                chars,
                max: tier.max_chars(),
            });
        }
        Ok(BoundedStr { tier, text })
    }

    pub fn tier(&self) -> StrTier {
        self.tier
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

// ──────────────────────────────────────────────
// Objects
// ──────────────────────────────────────────────

/// String-keyed mapping that keeps insertion order and rejects duplicate
/// keys. Equality compares contents and ignores order.
#[derive(Debug, Clone, Default)]
pub struct Object {
    entries: IndexMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Object::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Object {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a new key. A key that is already present is an error and the
    /// existing mapping is left untouched.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<(), ValidationError> {
        match self.entries.entry(key.into()) {
            Entry::Occupied(slot) => Err(ValidationError::DuplicateKey {
                key: slot.key().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|o| o == v))
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ──────────────────────────────────────────────
// Values
// ──────────────────────────────────────────────

/// One interchange value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(BoundedStr),
    Bool(bool),
    Null,
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Checked integer constructor for any integer tag.
    pub fn integer(tag: TypeTag, value: i128) -> Result<Value, ValidationError> {
        let (min, max) = tag.int_range().ok_or(ValidationError::TypeMismatch {
            expected: TypeTag::I64,
            found: tag,
        })?;
        if value < min || value > max {
            return Err(ValidationError::WidthOverflow { value, tag });
        }
        // Range was checked above, so every cast below is lossless.
        let v = match tag {
            TypeTag::I8 => Value::I8(value as i8),
            TypeTag::I16 => Value::I16(value as i16),
            TypeTag::I32 => Value::I32(value as i32),
            TypeTag::I64 => Value::I64(value as i64),
            TypeTag::U8 => Value::U8(value as u8),
            TypeTag::U16 => Value::U16(value as u16),
            TypeTag::U32 => Value::U32(value as u32),
            _ => Value::U64(value as u64),
        };
        Ok(v)
    }

    pub fn string(tier: StrTier, text: impl Into<String>) -> Result<Value, ValidationError> {
        BoundedStr::new(tier, text).map(Value::Str)
    }

    pub fn float32(value: f32) -> Value {
        Value::F32(value)
    }

    pub fn float64(value: f64) -> Value {
        Value::F64(value)
    }

    pub fn bool(value: bool) -> Value {
        Value::Bool(value)
    }

    pub fn null() -> Value {
        Value::Null
    }

    /// A new, empty array.
    pub fn array() -> Value {
        Value::Array(Vec::new())
    }

    /// A new, empty object.
    pub fn object() -> Value {
        Value::Object(Object::new())
    }

    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::I8(_) => TypeTag::I8,
            Value::I16(_) => TypeTag::I16,
            Value::I32(_) => TypeTag::I32,
            Value::I64(_) => TypeTag::I64,
            Value::U8(_) => TypeTag::U8,
            Value::U16(_) => TypeTag::U16,
            Value::U32(_) => TypeTag::U32,
            Value::U64(_) => TypeTag::U64,
            Value::F32(_) => TypeTag::F32,
            Value::F64(_) => TypeTag::F64,
            Value::Str(s) => s.tier().tag(),
            Value::Bool(_) => TypeTag::Bool,
            Value::Null => TypeTag::Null,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }

    /// Append to an array.
    pub fn push(&mut self, value: Value) -> Result<(), ValidationError> {
        match self {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(ValidationError::NotAContainer {
                operation: "push",
                found: other.type_tag(),
            }),
        }
    }

    /// Insert into an object; duplicate keys are rejected.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<(), ValidationError> {
        match self {
            Value::Object(obj) => obj.insert(key, value),
            other => Err(ValidationError::NotAContainer {
                operation: "insert",
                found: other.type_tag(),
            }),
        }
    }

    /// Element count of a container, `None` for leaves.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(items) => Some(items.len()),
            Value::Object(obj) => Some(obj.len()),
            _ => None,
        }
    }

    /// Indexed access into an array.
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    fn mismatch(&self, expected: TypeTag) -> ValidationError {
        ValidationError::TypeMismatch {
            expected,
            found: self.type_tag(),
        }
    }

    /// Read a string of exactly the given tier.
    pub fn as_str(&self, tier: StrTier) -> Result<&str, ValidationError> {
        match self {
            Value::Str(s) if s.tier() == tier => Ok(s.as_str()),
            other => Err(other.mismatch(tier.tag())),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ValidationError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(TypeTag::Bool)),
        }
    }

    pub fn as_null(&self) -> Result<(), ValidationError> {
        match self {
            Value::Null => Ok(()),
            other => Err(other.mismatch(TypeTag::Null)),
        }
    }

    pub fn as_array(&self) -> Result<&[Value], ValidationError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(TypeTag::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Object, ValidationError> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(other.mismatch(TypeTag::Object)),
        }
    }
}

macro_rules! typed_extractor {
    ($($name:ident => $variant:ident: $ty:ty),* $(,)?) => {
        impl Value {
            $(
                #[doc = concat!("Read a `", stringify!($ty), "` leaf; any other tag is a type mismatch.")]
                pub fn $name(&self) -> Result<$ty, ValidationError> {
                    match self {
                        Value::$variant(v) => Ok(*v),
                        other => Err(other.mismatch(TypeTag::$variant)),
                    }
                }
            )*
        }
    };
}

typed_extractor! {
    as_i8 => I8: i8,
    as_i16 => I16: i16,
    as_i32 => I32: i32,
    as_i64 => I64: i64,
    as_u8 => U8: u8,
    as_u16 => U16: u16,
    as_u32 => U32: u32,
    as_u64 => U64: u64,
    as_f32 => F32: f32,
    as_f64 => F64: f64,
}
