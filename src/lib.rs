#![warn(missing_docs)]
//! Named audio clip registry and playback dispatch for game clients.
//!
//! Maps string names to clips preloaded through a host playback API and
//! forwards play and volume requests to that host: one-shots for sound
//! effects, replace-and-start for music and ambience, and pass-through
//! writes to named mixer parameters. Play requests take a candidate list
//! and pick one entry at random, so call sites can shuffle between clip
//! variants.
//!
//! # Architecture
//!
//! - [`SoundBank`] - the registry and dispatcher; owns the host seams
//! - [`PlaybackHost`] / [`Mixer`] - traits the host engine implements
//! - [`AudioManifest`] - the three ordered clip lists fed to [`SoundBank::init`]
//! - [`VolumeSettings`] - slider state that forwards scaled values to the bank
//! - [`testkit`] - recording doubles for tests
//!
//! # Example
//!
//! ```ignore
//! let manifest = manifest_from_file(Path::new("config/audio.json"))?;
//! let mut bank = SoundBank::new(host, mixer);
//! bank.init(manifest)?;
//! bank.play_song(true, &["menu theme"])?;
//! bank.play_sound(&["click", "clack"])?;
//! ```

mod bank;
mod catalog;
mod config;
mod host;
mod settings;
pub mod testkit;

pub use bank::SoundBank;
pub use catalog::ClipCatalog;
pub use config::{manifest_from_file, manifest_from_str, AudioManifest, ClipDef, ManifestError};
pub use host::{
    Channel, ClipHandle, ClipLoadError, Mixer, ParameterNotFound, PlaybackHost, AMBIENCE_VOLUME,
    MASTER_VOLUME, MUSIC_VOLUME, SOUND_VOLUME,
};
pub use settings::{VolumeSettings, DEFAULT_SETTINGS_PATH, SLIDER_SCALE};

use thiserror::Error;

/// Errors emitted by registry and dispatch operations.
///
/// All of these surface synchronously from the call that triggered them;
/// nothing is retried or recovered internally.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The playback host could not resolve an asset at initialization.
    #[error(transparent)]
    ClipLoad(#[from] ClipLoadError),
    /// Two clips with the same name landed in one catalog at initialization.
    #[error("duplicate {channel} clip `{name}`")]
    DuplicateClip {
        /// Channel whose catalog was being built.
        channel: Channel,
        /// Name registered twice.
        name: String,
    },
    /// The bank already holds catalogs; the new manifest was discarded.
    #[error("audio catalogs already initialized; new manifest ignored")]
    AlreadyInitialized,
    /// The requested name is absent from the channel's catalog.
    #[error("no {channel} clip named `{name}`")]
    UnknownClip {
        /// Channel whose catalog was searched.
        channel: Channel,
        /// Requested clip name.
        name: String,
    },
    /// The named mixer parameter does not exist on the host mixer.
    #[error(transparent)]
    MixerParameter(#[from] ParameterNotFound),
    /// A play request carried an empty candidate list.
    #[error("no candidate names supplied for {channel} playback")]
    NoCandidates {
        /// Channel the request targeted.
        channel: Channel,
    },
}
