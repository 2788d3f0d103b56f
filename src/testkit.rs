//! Deterministic in-memory doubles for the playback and mixer seams.
//!
//! These record every host call so tests can assert on exact dispatch
//! sequences without a real audio engine behind them.

use std::collections::{HashMap, HashSet};

use crate::host::{
    Channel, ClipHandle, ClipLoadError, Mixer, ParameterNotFound, PlaybackHost, AMBIENCE_VOLUME,
    MASTER_VOLUME, MUSIC_VOLUME, SOUND_VOLUME,
};

/// One playback-host call captured by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// `load_clip` resolved an asset.
    Loaded {
        /// Asset reference that was resolved.
        asset: String,
        /// Handle issued for it.
        clip: ClipHandle,
    },
    /// `play_one_shot` fired.
    OneShot {
        /// Channel the one-shot ran on.
        channel: Channel,
        /// Clip that was played.
        clip: ClipHandle,
        /// Volume the dispatch carried.
        volume: f32,
    },
    /// `set_channel_clip` replaced a channel's clip.
    ClipSet {
        /// Channel that changed.
        channel: Channel,
        /// New clip.
        clip: ClipHandle,
    },
    /// `set_channel_loop` toggled looping.
    LoopSet {
        /// Channel that changed.
        channel: Channel,
        /// New loop flag.
        looping: bool,
    },
    /// `start_channel` started playback.
    Started {
        /// Channel that started.
        channel: Channel,
    },
}

/// Playback host double that issues sequential handles and records calls.
#[derive(Debug, Default)]
pub struct RecordingHost {
    next_handle: u64,
    failing: HashSet<String>,
    /// Every call observed, in order.
    pub events: Vec<HostEvent>,
}

impl RecordingHost {
    /// Create an empty recording host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `load_clip` fail for `asset`.
    pub fn fail_asset(&mut self, asset: impl Into<String>) {
        self.failing.insert(asset.into());
    }

    /// One-shot dispatches observed so far.
    pub fn one_shots(&self) -> impl Iterator<Item = &HostEvent> {
        self.events
            .iter()
            .filter(|event| matches!(event, HostEvent::OneShot { .. }))
    }
}

impl PlaybackHost for RecordingHost {
    fn load_clip(&mut self, asset: &str) -> Result<ClipHandle, ClipLoadError> {
        if self.failing.contains(asset) {
            return Err(ClipLoadError::new(asset, "missing asset"));
        }
        self.next_handle += 1;
        let clip = ClipHandle(self.next_handle);
        self.events.push(HostEvent::Loaded {
            asset: asset.to_string(),
            clip,
        });
        Ok(clip)
    }

    fn play_one_shot(&mut self, channel: Channel, clip: ClipHandle, volume: f32) {
        self.events.push(HostEvent::OneShot {
            channel,
            clip,
            volume,
        });
    }

    fn set_channel_clip(&mut self, channel: Channel, clip: ClipHandle) {
        self.events.push(HostEvent::ClipSet { channel, clip });
    }

    fn set_channel_loop(&mut self, channel: Channel, looping: bool) {
        self.events.push(HostEvent::LoopSet { channel, looping });
    }

    fn start_channel(&mut self, channel: Channel) {
        self.events.push(HostEvent::Started { channel });
    }
}

/// Mixer double backed by a plain parameter map.
#[derive(Debug)]
pub struct RecordingMixer {
    params: HashMap<String, f32>,
    /// Every accepted write, in order.
    pub writes: Vec<(String, f32)>,
}

impl RecordingMixer {
    /// Mixer exposing the four standard volume parameters, all at 0.0.
    pub fn new() -> Self {
        Self::with_parameters(&[MASTER_VOLUME, SOUND_VOLUME, MUSIC_VOLUME, AMBIENCE_VOLUME])
    }

    /// Mixer exposing exactly `names`, all at 0.0.
    pub fn with_parameters(names: &[&str]) -> Self {
        Self {
            params: names.iter().map(|name| (name.to_string(), 0.0)).collect(),
            writes: Vec::new(),
        }
    }

    /// Read a parameter back, `None` if it does not exist.
    pub fn get(&self, name: &str) -> Option<f32> {
        self.params.get(name).copied()
    }
}

impl Default for RecordingMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixer for RecordingMixer {
    fn set_parameter(&mut self, name: &str, value: f32) -> Result<(), ParameterNotFound> {
        match self.params.get_mut(name) {
            Some(slot) => {
                *slot = value;
                self.writes.push((name.to_string(), value));
                Ok(())
            }
            None => Err(ParameterNotFound {
                name: name.to_string(),
            }),
        }
    }
}
