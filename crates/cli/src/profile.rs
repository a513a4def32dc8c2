//! Profile selection from `--preset` and `--profile-file`.
//!
//! ```toml
//! preset = "source"
//! indent = 4
//! ```

use std::path::Path;

use gbln::{Profile, ProfileSpec};

use crate::Preset;

/// Read a profile TOML file from `path`.
///
/// Returns a human-readable error string on failure.
pub(crate) fn read_profile_spec(path: &Path) -> Result<ProfileSpec, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;

    toml::from_str(&content).map_err(|e| format!("could not parse '{}': {}", path.display(), e))
}

/// Resolve the effective profile. A `--preset` flag replaces the file's
/// `preset`; file fields then overlay it.
pub(crate) fn resolve_profile(
    preset: Option<Preset>,
    profile_file: Option<&Path>,
) -> Result<Profile, String> {
    let mut spec = match profile_file {
        Some(path) => read_profile_spec(path)?,
        None => ProfileSpec::default(),
    };
    if let Some(preset) = preset {
        spec.preset = Some(preset_name(preset).to_string());
    }
    spec.resolve().map_err(|e| match profile_file {
        Some(path) => format!("invalid profile '{}': {}", path.display(), e),
        None => format!("invalid profile: {}", e),
    })
}

fn preset_name(preset: Preset) -> &'static str {
    match preset {
        Preset::Io => "io",
        Preset::Source => "source",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_without_file() {
        assert_eq!(resolve_profile(None, None).unwrap(), Profile::io_default());
        assert_eq!(
            resolve_profile(Some(Preset::Source), None).unwrap(),
            Profile::source_default()
        );
    }

    #[test]
    fn file_overlays_flag_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");
        std::fs::write(&path, "preset = \"io\"\nindent = 4\n").unwrap();

        let profile = resolve_profile(Some(Preset::Source), Some(&path)).unwrap();
        assert!(!profile.compact());
        assert_eq!(profile.indent(), 4);
    }

    #[test]
    fn bad_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.toml");

        std::fs::write(&path, "compression_level = 12\n").unwrap();
        let err = resolve_profile(None, Some(&path)).unwrap_err();
        assert!(err.contains("compression level 12"), "{}", err);

        std::fs::write(&path, "colour = true\n").unwrap();
        let err = resolve_profile(None, Some(&path)).unwrap_err();
        assert!(err.starts_with("could not parse"), "{}", err);

        let err = resolve_profile(None, Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.starts_with("could not read"), "{}", err);
    }
}
