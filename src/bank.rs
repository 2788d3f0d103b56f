//! The audio registry and dispatcher.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::catalog::{CatalogSet, ClipCatalog};
use crate::config::AudioManifest;
use crate::host::{Channel, ClipHandle, Mixer, PlaybackHost, MASTER_VOLUME};
use crate::AudioError;

/// Volume every playback channel starts with.
const DEFAULT_CHANNEL_VOLUME: f32 = 1.0;

/// Mutable slot backing one playback channel.
#[derive(Debug, Clone)]
struct ChannelState {
    /// Clip currently assigned to the channel. Stays `None` for the
    /// sound-effect channel, whose dispatches are all one-shots.
    clip: Option<ClipHandle>,
    looping: bool,
    /// Volume passed along with one-shot dispatches.
    volume: f32,
}

impl Default for ChannelState {
    fn default() -> Self {
        Self {
            clip: None,
            looping: false,
            volume: DEFAULT_CHANNEL_VOLUME,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct ChannelSet {
    sound_effects: ChannelState,
    music: ChannelState,
    ambience: ChannelState,
}

impl ChannelSet {
    fn get(&self, channel: Channel) -> &ChannelState {
        match channel {
            Channel::SoundEffect => &self.sound_effects,
            Channel::Music => &self.music,
            Channel::Ambience => &self.ambience,
        }
    }

    fn get_mut(&mut self, channel: Channel) -> &mut ChannelState {
        match channel {
            Channel::SoundEffect => &mut self.sound_effects,
            Channel::Music => &mut self.music,
            Channel::Ambience => &mut self.ambience,
        }
    }
}

/// Named clip registry and playback dispatcher.
///
/// One bank is constructed by the application's composition root and passed
/// by `&mut` reference to whoever needs audio; all methods run synchronously
/// on the caller's thread and never block or spawn work. Catalogs are built
/// once by [`init`](SoundBank::init) and are read-only afterwards.
///
/// Play requests take an ordered candidate list and draw one entry uniformly
/// over the list, so callers can shuffle between variants by passing several
/// names, and weight a variant by repeating it.
pub struct SoundBank<H, M> {
    host: H,
    mixer: M,
    rng: StdRng,
    catalogs: CatalogSet,
    channels: ChannelSet,
    initialized: bool,
}

impl<H: PlaybackHost, M: Mixer> SoundBank<H, M> {
    /// Create a bank with a randomly seeded selection RNG.
    pub fn new(host: H, mixer: M) -> Self {
        Self::with_seed(host, mixer, rand::random())
    }

    /// Create a bank whose random selection is reproducible from `seed`.
    pub fn with_seed(host: H, mixer: M, seed: u64) -> Self {
        Self {
            host,
            mixer,
            rng: StdRng::seed_from_u64(seed),
            catalogs: CatalogSet::default(),
            channels: ChannelSet::default(),
            initialized: false,
        }
    }

    /// Build the three clip catalogs from `manifest`.
    ///
    /// Entries are resolved through the playback host in list order. The
    /// first unresolvable asset or duplicate name aborts the whole call and
    /// leaves the bank uninitialized, with no partial catalogs.
    ///
    /// First initialization wins: once a manifest has been accepted, later
    /// calls keep the existing catalogs, drop the new manifest, and return
    /// [`AudioError::AlreadyInitialized`].
    pub fn init(&mut self, manifest: AudioManifest) -> Result<(), AudioError> {
        if self.initialized {
            warn!("Ignoring audio re-initialization; keeping existing catalogs");
            return Err(AudioError::AlreadyInitialized);
        }

        let AudioManifest {
            sound_effects,
            music_tracks,
            ambience_tracks,
        } = manifest;

        let sound_effects =
            ClipCatalog::resolve(&mut self.host, Channel::SoundEffect, sound_effects)?;
        let music = ClipCatalog::resolve(&mut self.host, Channel::Music, music_tracks)?;
        let ambience = ClipCatalog::resolve(&mut self.host, Channel::Ambience, ambience_tracks)?;

        debug!(
            "Audio catalogs ready: {} sound effects, {} music tracks, {} ambience tracks",
            sound_effects.len(),
            music.len(),
            ambience.len()
        );
        self.catalogs = CatalogSet {
            sound_effects,
            music,
            ambience,
        };
        self.initialized = true;
        Ok(())
    }

    /// True once a manifest has been accepted.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Play one sound effect chosen uniformly from `names`.
    ///
    /// The dispatch is fire-and-forget: overlapping one-shots are
    /// independent, and nothing is queued or interrupted.
    pub fn play_sound(&mut self, names: &[&str]) -> Result<(), AudioError> {
        let name = self.select(Channel::SoundEffect, names)?;
        let clip = self.lookup(Channel::SoundEffect, name)?;
        let volume = self.channels.get(Channel::SoundEffect).volume;
        debug!("Playing sound effect `{name}`");
        self.host.play_one_shot(Channel::SoundEffect, clip, volume);
        Ok(())
    }

    /// Start one music track chosen uniformly from `names`.
    ///
    /// The music channel holds a single clip, so whatever was playing is
    /// replaced; there is no cross-fade and no queued next track.
    pub fn play_song(&mut self, looping: bool, names: &[&str]) -> Result<(), AudioError> {
        self.start_channel_clip(Channel::Music, looping, names)
    }

    /// Start one ambience track chosen uniformly from `names`.
    ///
    /// Replaces whatever the ambience channel was playing, like
    /// [`play_song`](SoundBank::play_song) does for music.
    pub fn play_ambience(&mut self, looping: bool, names: &[&str]) -> Result<(), AudioError> {
        self.start_channel_clip(Channel::Ambience, looping, names)
    }

    fn start_channel_clip(
        &mut self,
        channel: Channel,
        looping: bool,
        names: &[&str],
    ) -> Result<(), AudioError> {
        let name = self.select(channel, names)?;
        let clip = self.lookup(channel, name)?;

        let state = self.channels.get_mut(channel);
        state.clip = Some(clip);
        state.looping = looping;

        debug!("Starting {channel} clip `{name}` (looping: {looping})");
        self.host.set_channel_clip(channel, clip);
        self.host.set_channel_loop(channel, looping);
        self.host.start_channel(channel);
        Ok(())
    }

    /// Draw one candidate uniformly over the list. Duplicates in `names`
    /// raise that entry's effective probability.
    fn select<'n>(&mut self, channel: Channel, names: &[&'n str]) -> Result<&'n str, AudioError> {
        if names.is_empty() {
            return Err(AudioError::NoCandidates { channel });
        }
        let idx = self.rng.gen_range(0..names.len());
        Ok(names[idx])
    }

    fn lookup(&self, channel: Channel, name: &str) -> Result<ClipHandle, AudioError> {
        self.catalogs
            .channel(channel)
            .get(name)
            .ok_or_else(|| AudioError::UnknownClip {
                channel,
                name: name.to_string(),
            })
    }

    /// Write `value` to the master mixer parameter.
    ///
    /// The value is forwarded unchanged, with no clamping and no unit
    /// conversion, so callers must supply whatever unit and range the
    /// mixer parameter expects. The same holds for the three channel
    /// volume operations.
    pub fn adjust_master_volume(&mut self, value: f32) -> Result<(), AudioError> {
        Ok(self.mixer.set_parameter(MASTER_VOLUME, value)?)
    }

    /// Write `value` to the sound-effect mixer parameter.
    pub fn adjust_sound_volume(&mut self, value: f32) -> Result<(), AudioError> {
        Ok(self
            .mixer
            .set_parameter(Channel::SoundEffect.volume_parameter(), value)?)
    }

    /// Write `value` to the music mixer parameter.
    pub fn adjust_music_volume(&mut self, value: f32) -> Result<(), AudioError> {
        Ok(self
            .mixer
            .set_parameter(Channel::Music.volume_parameter(), value)?)
    }

    /// Write `value` to the ambience mixer parameter.
    pub fn adjust_ambience_volume(&mut self, value: f32) -> Result<(), AudioError> {
        Ok(self
            .mixer
            .set_parameter(Channel::Ambience.volume_parameter(), value)?)
    }

    /// Catalog backing `channel`.
    pub fn catalog(&self, channel: Channel) -> &ClipCatalog {
        self.catalogs.channel(channel)
    }

    /// Resolve a registered clip by name without playing it.
    pub fn clip(&self, channel: Channel, name: &str) -> Option<ClipHandle> {
        self.catalogs.channel(channel).get(name)
    }

    /// Clip currently assigned to `channel` (always `None` for the
    /// sound-effect channel).
    pub fn current_clip(&self, channel: Channel) -> Option<ClipHandle> {
        self.channels.get(channel).clip
    }

    /// Whether `channel` is set to loop its current clip.
    pub fn is_looping(&self, channel: Channel) -> bool {
        self.channels.get(channel).looping
    }

    /// Volume passed along with dispatches on `channel`.
    pub fn channel_volume(&self, channel: Channel) -> f32 {
        self.channels.get(channel).volume
    }

    /// Access the playback host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the playback host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Access the mixer.
    pub fn mixer(&self) -> &M {
        &self.mixer
    }

    /// Mutable access to the mixer.
    pub fn mixer_mut(&mut self) -> &mut M {
        &mut self.mixer
    }
}
