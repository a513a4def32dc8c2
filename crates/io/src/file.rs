//! Reading and writing interchange files.
//!
//! Every error leaving this module is wrapped with the path it concerns.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use gbln_core::{Engine, Error, ParseError, Profile, Value};
use gbln_interchange::{decode, encode, Native};

use crate::compression::{compress, decompress, is_compressed_path};

/// Print `value` with `profile` and write it to `path`, compressing when
/// the name ends in `.xz`.
pub fn write_value<E: Engine + ?Sized>(
    engine: &E,
    path: &Path,
    value: &Value,
    profile: &Profile,
) -> Result<(), Error> {
    let text = engine.print(value, profile);
    write_text(path, &text, profile).map_err(|e| e.in_file(path))
}

/// Read `path`, decompressing when the name ends in `.xz`, and parse it.
pub fn read_value<E: Engine + ?Sized>(engine: &E, path: &Path) -> Result<Value, Error> {
    let text = read_text(path).map_err(|e| e.in_file(path))?;
    engine
        .parse(&text)
        .map_err(|e| Error::from(e).in_file(path))
}

/// Encode a native value and write it; `None` uses the I/O preset.
pub fn write_file<E: Engine + ?Sized>(
    engine: &E,
    path: &Path,
    native: &Native,
    profile: Option<&Profile>,
) -> Result<(), Error> {
    let value = encode(native).map_err(|e| e.in_file(path))?;
    let profile = profile.copied().unwrap_or_default();
    write_value(engine, path, &value, &profile)
}

/// Read a file and decode it into a native value.
pub fn read_file<E: Engine + ?Sized>(engine: &E, path: &Path) -> Result<Native, Error> {
    let value = read_value(engine, path)?;
    decode(&value).map_err(|e| e.in_file(path))
}

fn write_text(path: &Path, text: &str, profile: &Profile) -> Result<(), Error> {
    let compressed = is_compressed_path(path);
    if profile.compress() && !compressed {
        tracing::warn!(
            path = %path.display(),
            "profile requests compression but the file name has no .xz suffix; writing plain text"
        );
    }
    let bytes = if compressed {
        compress(text.as_bytes(), profile.compression_level())?
    } else {
        text.as_bytes().to_vec()
    };
    write_atomic(path, &bytes)?;
    tracing::debug!(
        path = %path.display(),
        text_bytes = text.len(),
        file_bytes = bytes.len(),
        compressed,
        "wrote interchange file"
    );
    Ok(())
}

fn read_text(path: &Path) -> Result<String, Error> {
    let raw = fs::read(path)?;
    let bytes = if is_compressed_path(path) {
        decompress(&raw)?
    } else {
        raw
    };
    tracing::debug!(
        path = %path.display(),
        file_bytes = bytes.len(),
        "read interchange file"
    );
    String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let line = valid.iter().filter(|b| **b == b'\n').count() as u32 + 1;
        Error::from(ParseError::new(
            line,
            1,
            format!("file is not valid UTF-8: {}", e.utf8_error()),
        ))
    })
}

/// Write through a temporary file in the destination directory that is
/// synced and then renamed over `path`, so a failed write never leaves a
/// truncated file in place.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
