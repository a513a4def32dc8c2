//! Serialisation profiles.
//!
//! A [`Profile`] is validated once at construction and read-only afterwards.
//! [`ProfileSpec`] is the loosely-typed form read from configuration files:
//! every field is optional and overlays a named preset.
//!
//! # Example
//!
//! ```toml
//! preset = "source"
//! indent = 4
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MAX_COMPRESSION_LEVEL: u32 = 9;
pub const MAX_INDENT: u32 = 8;

/// Formatting and compression options for printing and file output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    compact: bool,
    compress: bool,
    compression_level: u8,
    indent: u8,
    strip_comments: bool,
}

impl Profile {
    pub fn new(
        compact: bool,
        compress: bool,
        compression_level: u32,
        indent: u32,
        strip_comments: bool,
    ) -> Result<Profile, ConfigError> {
        if compression_level > MAX_COMPRESSION_LEVEL {
            return Err(ConfigError::CompressionLevel(compression_level));
        }
        if indent > MAX_INDENT {
            return Err(ConfigError::Indent(indent));
        }
        Ok(Profile {
            compact,
            compress,
            compression_level: compression_level as u8,
            indent: indent as u8,
            strip_comments,
        })
    }

    /// Compact, xz level 6, comments stripped.
    pub fn io_default() -> Profile {
        Profile {
            compact: true,
            compress: true,
            compression_level: 6,
            indent: 2,
            strip_comments: true,
        }
    }

    /// Indented, uncompressed, comments preserved.
    pub fn source_default() -> Profile {
        Profile {
            compact: false,
            compress: false,
            compression_level: 6,
            indent: 2,
            strip_comments: false,
        }
    }

    pub fn compact(&self) -> bool {
        self.compact
    }

    pub fn compress(&self) -> bool {
        self.compress
    }

    pub fn compression_level(&self) -> u32 {
        self.compression_level as u32
    }

    pub fn indent(&self) -> u8 {
        self.indent
    }

    pub fn strip_comments(&self) -> bool {
        self.strip_comments
    }

    /// Conventional file name for `stem` under this profile.
    pub fn file_name(&self, stem: &str) -> String {
        if self.compress {
            format!("{}.{}{}", stem, crate::FILE_EXTENSION, crate::COMPRESSED_SUFFIX)
        } else {
            format!("{}.{}", stem, crate::FILE_EXTENSION)
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::io_default()
    }
}

/// Profile as written in a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSpec {
    /// `"io"` (default) or `"source"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compact: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_comments: Option<bool>,
}

impl ProfileSpec {
    /// Overlay the present fields on the preset and validate the result.
    pub fn resolve(&self) -> Result<Profile, ConfigError> {
        let base = match self.preset.as_deref() {
            None | Some("io") => Profile::io_default(),
            Some("source") => Profile::source_default(),
            Some(other) => return Err(ConfigError::UnknownPreset(other.to_string())),
        };
        Profile::new(
            self.compact.unwrap_or(base.compact),
            self.compress.unwrap_or(base.compress),
            self.compression_level
                .unwrap_or(base.compression_level()),
            self.indent.unwrap_or(base.indent as u32),
            self.strip_comments.unwrap_or(base.strip_comments),
        )
    }
}
