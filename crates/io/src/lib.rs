//! gbln-io: interchange files on disk.
//!
//! Reads and writes interchange text through an [`Engine`], compressing
//! with xz exactly when the file name ends in `.xz`, converts between JSON
//! and interchange files, and compares encoded sizes.
//!
//! [`Engine`]: gbln_core::Engine

pub mod compare;
pub mod compression;
pub mod file;
pub mod json_file;

pub use compare::{compare_sizes, savings_percent, SizeComparison};
pub use compression::{is_compressed_path, COMPRESSED_SUFFIX, FILE_EXTENSION};
pub use file::{read_file, read_value, write_file, write_value};
pub use json_file::{convert_from_json, convert_to_json, read_json_file};
