//! Playback and mixer seams supplied by the host engine.

use std::fmt;

use thiserror::Error;

/// Mixer parameter written by [`adjust_master_volume`](crate::SoundBank::adjust_master_volume).
pub const MASTER_VOLUME: &str = "masterVolume";
/// Mixer parameter written by [`adjust_sound_volume`](crate::SoundBank::adjust_sound_volume).
pub const SOUND_VOLUME: &str = "soundVolume";
/// Mixer parameter written by [`adjust_music_volume`](crate::SoundBank::adjust_music_volume).
pub const MUSIC_VOLUME: &str = "musicVolume";
/// Mixer parameter written by [`adjust_ambience_volume`](crate::SoundBank::adjust_ambience_volume).
pub const AMBIENCE_VOLUME: &str = "ambienceVolume";

/// Opaque reference to a clip loaded by the playback host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipHandle(pub u64);

/// Playback channels the bank dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Fire-and-forget one-shots; overlapping instances are independent.
    SoundEffect,
    /// Background music; holds one clip at a time.
    Music,
    /// Environmental ambience; holds one clip at a time.
    Ambience,
}

impl Channel {
    /// Mixer parameter carrying this channel's volume.
    pub fn volume_parameter(self) -> &'static str {
        match self {
            Channel::SoundEffect => SOUND_VOLUME,
            Channel::Music => MUSIC_VOLUME,
            Channel::Ambience => AMBIENCE_VOLUME,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::SoundEffect => "sound effect",
            Channel::Music => "music",
            Channel::Ambience => "ambience",
        };
        f.write_str(name)
    }
}

/// Error returned when the host cannot resolve an asset reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load clip `{asset}`: {reason}")]
pub struct ClipLoadError {
    /// Asset reference the host was asked to resolve.
    pub asset: String,
    /// Host-supplied description of the failure.
    pub reason: String,
}

impl ClipLoadError {
    /// Construct a load error for `asset`.
    pub fn new(asset: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            reason: reason.into(),
        }
    }
}

/// Error returned when a named mixer parameter does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no mixer parameter named `{name}`")]
pub struct ParameterNotFound {
    /// Parameter name the caller tried to write.
    pub name: String,
}

/// Playback surface consumed by the bank.
///
/// Implementations own the actual audio machinery. The bank only resolves
/// names to handles and forwards requests: `load_clip` runs during
/// [`init`](crate::SoundBank::init), the rest run once per dispatch.
pub trait PlaybackHost {
    /// Resolve an asset reference to a playable clip.
    fn load_clip(&mut self, asset: &str) -> Result<ClipHandle, ClipLoadError>;

    /// Start an independent one-shot instance of `clip` on `channel`.
    fn play_one_shot(&mut self, channel: Channel, clip: ClipHandle, volume: f32);

    /// Replace the clip held by `channel`.
    fn set_channel_clip(&mut self, channel: Channel, clip: ClipHandle);

    /// Set whether `channel` loops its clip.
    fn set_channel_loop(&mut self, channel: Channel, looping: bool);

    /// Start (or restart) playback of the clip held by `channel`.
    fn start_channel(&mut self, channel: Channel);
}

/// Mixer surface consumed by the volume operations.
pub trait Mixer {
    /// Write `value` to the named parameter.
    fn set_parameter(&mut self, name: &str, value: f32) -> Result<(), ParameterNotFound>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_volume_parameters_match_mixer_names() {
        assert_eq!(Channel::SoundEffect.volume_parameter(), SOUND_VOLUME);
        assert_eq!(Channel::Music.volume_parameter(), MUSIC_VOLUME);
        assert_eq!(Channel::Ambience.volume_parameter(), AMBIENCE_VOLUME);
    }

    #[test]
    fn channel_display_names() {
        assert_eq!(Channel::SoundEffect.to_string(), "sound effect");
        assert_eq!(Channel::Music.to_string(), "music");
        assert_eq!(Channel::Ambience.to_string(), "ambience");
    }

    #[test]
    fn clip_load_error_message_names_the_asset() {
        let err = ClipLoadError::new("sounds/step.wav", "missing file");
        assert_eq!(
            err.to_string(),
            "failed to load clip `sounds/step.wav`: missing file"
        );
    }
}
