//! Clip manifest schema and loading helpers.
//!
//! The manifest is a pass-through input shape: three ordered lists of
//! `(name, asset)` pairs, one per playback channel. Nothing is validated
//! here beyond JSON well-formedness; assets are resolved (and duplicates
//! rejected) when the manifest reaches [`SoundBank::init`](crate::SoundBank::init).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// One named clip: the name callers use plus the host asset reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClipDef {
    /// Name used in play requests.
    pub name: String,
    /// Asset reference resolved by the playback host.
    pub asset: String,
}

impl ClipDef {
    /// Construct an entry from name and asset reference.
    pub fn new(name: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
        }
    }
}

/// The three ordered clip lists supplied to [`SoundBank::init`](crate::SoundBank::init).
///
/// Any list may be omitted in the JSON form and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AudioManifest {
    /// One-shot sound effects.
    pub sound_effects: Vec<ClipDef>,
    /// Background music tracks.
    pub music_tracks: Vec<ClipDef>,
    /// Ambience tracks.
    pub ambience_tracks: Vec<ClipDef>,
}

impl AudioManifest {
    /// Total entries across all three lists.
    pub fn len(&self) -> usize {
        self.sound_effects.len() + self.music_tracks.len() + self.ambience_tracks.len()
    }

    /// True when every list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors emitted while reading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Wrap IO errors when reading manifest files.
    #[error("failed to read audio manifest: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse audio manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a manifest from an in-memory JSON string.
pub fn manifest_from_str(input: &str) -> Result<AudioManifest, ManifestError> {
    Ok(serde_json::from_str(input)?)
}

/// Load a manifest from the provided JSON file path.
pub fn manifest_from_file(path: &Path) -> Result<AudioManifest, ManifestError> {
    let data = fs::read_to_string(path)?;
    manifest_from_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let manifest = manifest_from_str(
            r#"{
                "sound_effects": [
                    { "name": "boom", "asset": "sounds/boom.wav" },
                    { "name": "click", "asset": "sounds/click.wav" }
                ],
                "music_tracks": [
                    { "name": "menu theme", "asset": "music/menu.ogg" }
                ],
                "ambience_tracks": [
                    { "name": "wind", "asset": "ambience/wind.ogg" }
                ]
            }"#,
        )
        .expect("valid manifest");

        assert_eq!(manifest.len(), 4);
        assert_eq!(manifest.sound_effects[0], ClipDef::new("boom", "sounds/boom.wav"));
        assert_eq!(manifest.music_tracks[0].name, "menu theme");
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let manifest = manifest_from_str(r#"{ "music_tracks": [] }"#).expect("valid manifest");
        assert!(manifest.is_empty());
        assert!(manifest.sound_effects.is_empty());
        assert!(manifest.ambience_tracks.is_empty());
    }

    #[test]
    fn entry_order_is_preserved() {
        let manifest = manifest_from_str(
            r#"{
                "sound_effects": [
                    { "name": "c", "asset": "sounds/c.wav" },
                    { "name": "a", "asset": "sounds/a.wav" },
                    { "name": "b", "asset": "sounds/b.wav" }
                ]
            }"#,
        )
        .expect("valid manifest");

        let names: Vec<&str> = manifest
            .sound_effects
            .iter()
            .map(|def| def.name.as_str())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = manifest_from_str("{ not json").expect_err("parse should fail");
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = manifest_from_file(Path::new("config/does_not_exist.json"))
            .expect_err("read should fail");
        assert!(matches!(err, ManifestError::Io(_)));
    }
}
