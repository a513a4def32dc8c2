//! xz compression selected by file name.
//!
//! A path is compressed exactly when its name ends in
//! [`COMPRESSED_SUFFIX`]; no flag can override the name. Without the `xz`
//! feature both directions fail with an I/O error instead of silently
//! handling uncompressed bytes under a compressed name.

use std::io;
use std::path::Path;

pub use gbln_core::{COMPRESSED_SUFFIX, FILE_EXTENSION};

/// Whether `path` names a compressed interchange file.
pub fn is_compressed_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(COMPRESSED_SUFFIX))
}

/// Compress with xz at `level` (0-9).
#[cfg(feature = "xz")]
pub fn compress(data: &[u8], level: u32) -> io::Result<Vec<u8>> {
    use std::io::Write;
    use xz2::write::XzEncoder;

    let mut encoder = XzEncoder::new(Vec::new(), level);
    encoder.write_all(data)?;
    encoder.finish()
}

/// Decompress an xz stream.
#[cfg(feature = "xz")]
pub fn decompress(data: &[u8]) -> io::Result<Vec<u8>> {
    use std::io::Read;
    use xz2::read::XzDecoder;

    let mut decoder = XzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(not(feature = "xz"))]
pub fn compress(_data: &[u8], _level: u32) -> io::Result<Vec<u8>> {
    Err(codec_unavailable())
}

#[cfg(not(feature = "xz"))]
pub fn decompress(_data: &[u8]) -> io::Result<Vec<u8>> {
    Err(codec_unavailable())
}

#[cfg(not(feature = "xz"))]
fn codec_unavailable() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "xz compression support is not compiled in",
    )
}
