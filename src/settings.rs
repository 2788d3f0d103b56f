//! Volume slider state, forwarding, and persistence.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bank::SoundBank;
use crate::host::{Mixer, PlaybackHost};
use crate::AudioError;

/// Default location for persisted volume settings.
pub const DEFAULT_SETTINGS_PATH: &str = "config/audio.toml";

/// Factor applied to slider positions before they reach the mixer.
pub const SLIDER_SCALE: f32 = 10.0;

/// Positions of the four volume sliders.
///
/// Positions are stored exactly as a settings panel would show them; the
/// matching mixer parameter receives `position * SLIDER_SCALE`. Range policy
/// belongs to the mixer; nothing is clamped here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeSettings {
    /// Master slider position.
    pub master: f32,
    /// Sound-effect slider position.
    pub sound: f32,
    /// Music slider position.
    pub music: f32,
    /// Ambience slider position.
    pub ambience: f32,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self {
            master: 1.0,
            sound: 1.0,
            music: 0.5,
            ambience: 0.7,
        }
    }
}

impl VolumeSettings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_SETTINGS_PATH))
    }

    /// Load settings from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<VolumeSettings>(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    VolumeSettings::default()
                }
            },
            Err(err) => {
                if err.kind() == std::io::ErrorKind::NotFound {
                    warn!(
                        "Volume settings not found at {}. Using defaults",
                        path.display()
                    );
                } else {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                VolumeSettings::default()
            }
        }
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(Path::new(DEFAULT_SETTINGS_PATH))
    }

    /// Save settings to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Push all four slider positions to the bank's mixer parameters.
    pub fn apply<H: PlaybackHost, M: Mixer>(
        &self,
        bank: &mut SoundBank<H, M>,
    ) -> Result<(), AudioError> {
        bank.adjust_master_volume(self.master * SLIDER_SCALE)?;
        bank.adjust_sound_volume(self.sound * SLIDER_SCALE)?;
        bank.adjust_music_volume(self.music * SLIDER_SCALE)?;
        bank.adjust_ambience_volume(self.ambience * SLIDER_SCALE)?;
        Ok(())
    }

    /// Record a master slider move and forward it to the mixer.
    pub fn master_changed<H: PlaybackHost, M: Mixer>(
        &mut self,
        bank: &mut SoundBank<H, M>,
        position: f32,
    ) -> Result<(), AudioError> {
        self.master = position;
        bank.adjust_master_volume(position * SLIDER_SCALE)
    }

    /// Record a sound-effect slider move and forward it to the mixer.
    pub fn sound_changed<H: PlaybackHost, M: Mixer>(
        &mut self,
        bank: &mut SoundBank<H, M>,
        position: f32,
    ) -> Result<(), AudioError> {
        self.sound = position;
        bank.adjust_sound_volume(position * SLIDER_SCALE)
    }

    /// Record a music slider move and forward it to the mixer.
    pub fn music_changed<H: PlaybackHost, M: Mixer>(
        &mut self,
        bank: &mut SoundBank<H, M>,
        position: f32,
    ) -> Result<(), AudioError> {
        self.music = position;
        bank.adjust_music_volume(position * SLIDER_SCALE)
    }

    /// Record an ambience slider move and forward it to the mixer.
    pub fn ambience_changed<H: PlaybackHost, M: Mixer>(
        &mut self,
        bank: &mut SoundBank<H, M>,
        position: f32,
    ) -> Result<(), AudioError> {
        self.ambience = position;
        bank.adjust_ambience_volume(position * SLIDER_SCALE)
    }
}
