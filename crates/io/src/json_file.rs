//! Converting between JSON files and interchange files.

use std::fs;
use std::path::Path;

use gbln_core::{Engine, Error, Profile};
use gbln_interchange::{encode, json_error, value_to_json_string, Native};

use crate::file::{read_value, write_atomic, write_value};

/// Read a JSON file into a native value.
pub fn read_json_file(path: &Path) -> Result<Native, Error> {
    let text = fs::read_to_string(path).map_err(|e| Error::from(e).in_file(path))?;
    let json: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| json_error(e).in_file(path))?;
    Ok(Native::from(json))
}

/// Read a JSON file and write it as an interchange file; `None` uses the
/// I/O preset. Compression follows the destination name.
pub fn convert_from_json<E: Engine + ?Sized>(
    engine: &E,
    json_path: &Path,
    gbln_path: &Path,
    profile: Option<&Profile>,
) -> Result<(), Error> {
    let native = read_json_file(json_path)?;
    let value = encode(&native).map_err(|e| e.in_file(json_path))?;
    let profile = profile.copied().unwrap_or_default();
    write_value(engine, gbln_path, &value, &profile)
}

/// Read an interchange file and write it as JSON.
pub fn convert_to_json<E: Engine + ?Sized>(
    engine: &E,
    gbln_path: &Path,
    json_path: &Path,
    pretty: bool,
) -> Result<(), Error> {
    let value = read_value(engine, gbln_path)?;
    let mut json = value_to_json_string(&value, pretty).map_err(|e| e.in_file(gbln_path))?;
    if pretty {
        json.push('\n');
    }
    write_atomic(json_path, json.as_bytes()).map_err(|e| Error::from(e).in_file(json_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbln_core::{ErrorKind, TextEngine};

    #[test]
    fn json_to_gbln_and_back() {
        let dir = tempfile::tempdir().unwrap();
        let json_in = dir.path().join("in.json");
        let gbln = dir.path().join("data.gbln");
        let json_out = dir.path().join("out.json");
        fs::write(&json_in, r#"{"name":"Alice","age":25,"tags":["a","b"]}"#).unwrap();

        convert_from_json(&TextEngine, &json_in, &gbln, Some(&Profile::io_default())).unwrap();
        assert_eq!(
            fs::read_to_string(&gbln).unwrap(),
            "{name<s64>(Alice)age<u8>(25)tags[<s64>(a)<s64>(b)]}"
        );

        convert_to_json(&TextEngine, &gbln, &json_out, false).unwrap();
        assert_eq!(
            fs::read_to_string(&json_out).unwrap(),
            r#"{"name":"Alice","age":25,"tags":["a","b"]}"#
        );
    }

    #[test]
    fn bad_json_names_the_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let json_in = dir.path().join("broken.json");
        fs::write(&json_in, "{").unwrap();
        let err = convert_from_json(&TextEngine, &json_in, &dir.path().join("x.gbln"), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("broken.json"), "{}", err);
    }
}
