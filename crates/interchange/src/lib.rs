//! gbln-interchange: native values, the value-model converter and JSON.
//!
//! Provides the [`Native`] dynamic value, [`encode`]/[`decode`] between
//! natives and value-model trees, and JSON interoperability built on the
//! same converter, so JSON input is classified exactly like any other
//! host value.

pub mod convert;
pub mod json;
pub mod native;

pub use convert::{decode, encode, is_dense};
pub use json::{json_error, to_json, value_from_json_str, value_to_json_string};
pub use native::{Key, Native};
