//! File-level behaviour of gbln-io: compression chosen by name, JSON
//! conversion and size comparison.

use std::fs;

use gbln_core::{ErrorKind, Profile, TextEngine};
use gbln_interchange::Native;
use gbln_io::{
    compare_sizes, convert_from_json, convert_to_json, read_file, write_file, FILE_EXTENSION,
};

fn record() -> Native {
    Native::map([
        ("name", Native::from("Alice")),
        ("age", Native::from(25)),
        ("active", Native::from(true)),
    ])
}

#[cfg(feature = "xz")]
#[test]
fn compressed_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.gbln.xz");
    write_file(&TextEngine, &path, &record(), Some(&Profile::io_default())).unwrap();

    let raw = fs::read(&path).unwrap();
    // xz stream magic
    assert_eq!(raw[..6], [0xFD, b'7', b'z', b'X', b'Z', 0x00]);
    assert_eq!(read_file(&TextEngine, &path).unwrap(), record());
}

#[cfg(feature = "xz")]
#[test]
fn suffix_decides_compression_not_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.gbln.xz");
    // The source preset does not ask for compression, the name does.
    write_file(&TextEngine, &path, &record(), Some(&Profile::source_default())).unwrap();
    assert!(!fs::read(&path).unwrap().starts_with(b"{"));
    assert_eq!(read_file(&TextEngine, &path).unwrap(), record());
}

#[cfg(not(feature = "xz"))]
#[test]
fn compressed_names_fail_without_codec() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.gbln.xz");
    let err = write_file(&TextEngine, &path, &record(), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!path.exists());
}

#[test]
fn plain_name_ignores_compress_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("data.{}", FILE_EXTENSION));
    write_file(&TextEngine, &path, &record(), Some(&Profile::io_default())).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{name<s64>(Alice)age<u8>(25)active<b>(t)}"
    );
}

#[test]
fn json_conversion_both_ways() {
    let dir = tempfile::tempdir().unwrap();
    let json_in = dir.path().join("user.json");
    let gbln = dir.path().join(Profile::source_default().file_name("user"));
    let json_out = dir.path().join("back.json");
    fs::write(&json_in, r#"{"user": {"id": 12345, "tags": ["admin"], "score": -1.5}}"#).unwrap();

    convert_from_json(&TextEngine, &json_in, &gbln, Some(&Profile::source_default())).unwrap();
    let text = fs::read_to_string(&gbln).unwrap();
    assert!(text.contains("id<u16>(12345)"), "{}", text);
    assert!(text.contains("score<f64>(-1.5)"), "{}", text);

    convert_to_json(&TextEngine, &gbln, &json_out, true).unwrap();
    let back: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(
        back,
        serde_json::json!({"user": {"id": 12345, "tags": ["admin"], "score": -1.5}})
    );
}

#[test]
fn converting_a_missing_json_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_from_json(
        &TextEngine,
        &dir.path().join("nope.json"),
        &dir.path().join("out.gbln"),
        None,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.to_string().contains("nope.json"), "{}", err);
}

#[test]
fn size_comparison_for_nested_record() {
    let native = Native::map([("users", Native::seq([record(), record(), record()]))]);
    let cmp = compare_sizes(&TextEngine, &native).unwrap();
    assert!(cmp.compact_bytes > 0);
    assert!(cmp.json_bytes > 0);
    assert_eq!(
        cmp.savings_percent,
        gbln_io::savings_percent(cmp.compact_bytes, cmp.json_bytes)
    );
}

#[test]
fn size_comparison_rejects_unencodable_input() {
    let err = compare_sizes(&TextEngine, &Native::Bytes(vec![0])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Serialise);
}

fn nested(levels: usize) -> Native {
    (0..levels).fold(Native::Null, |inner, _| Native::seq([inner]))
}

#[test]
fn deepest_writable_value_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep.gbln");
    let deep = nested(gbln_core::parser::MAX_DEPTH);
    write_file(&TextEngine, &path, &deep, None).unwrap();
    assert_eq!(read_file(&TextEngine, &path).unwrap(), deep);
}

#[test]
fn too_deep_value_fails_at_write_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep.gbln");
    let err = write_file(&TextEngine, &path, &nested(600), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("nesting deeper than"), "{}", err);
    assert!(!path.exists());
}
