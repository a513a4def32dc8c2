pub(crate) mod compare;
pub(crate) mod convert;
pub(crate) mod fmt;
pub(crate) mod roundtrip;
pub(crate) mod validate;
