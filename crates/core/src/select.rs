//! Narrowest-type selection for native integers, strings and floats.
//!
//! Integers pick the smallest width that holds them exactly (unsigned for
//! non-negative values, signed for negative ones). Strings pick the
//! smallest tier by character count. Floats are always 64-bit.

use crate::error::ValidationError;
use crate::value::{StrTier, TypeTag, Value};

/// Choose the integer tag for `n`.
pub fn select_int(n: i128) -> Result<TypeTag, ValidationError> {
    let candidates = if n >= 0 {
        &TypeTag::UNSIGNED
    } else {
        &TypeTag::SIGNED
    };
    candidates
        .iter()
        .copied()
        .find(|tag| {
            tag.int_range()
                .is_some_and(|(min, max)| n >= min && n <= max)
        })
        .ok_or(ValidationError::IntegerOutOfRange { value: n })
}

/// Choose the string tier for `s`.
pub fn select_str(s: &str) -> Result<StrTier, ValidationError> {
    let chars = s.chars().count();
    StrTier::ALL
        .iter()
        .copied()
        .find(|tier| chars <= tier.max_chars())
        .ok_or(ValidationError::StringTooLong {
            chars,
            max: StrTier::S1024.max_chars(),
        })
}

pub fn encode_int(n: i128) -> Result<Value, ValidationError> {
    Value::integer(select_int(n)?, n)
}

pub fn encode_str(s: impl Into<String>) -> Result<Value, ValidationError> {
    let s = s.into();
    let tier = select_str(&s)?;
    Value::string(tier, s)
}

/// Floats are never narrowed.
pub fn encode_float(f: f64) -> Value {
    Value::F64(f)
}
