//! soundbank-demo - drives a bank against console-logging host stubs.
//!
//! Stands in for the host engine wiring: the composition root owns the bank
//! and everything else reaches it by reference.

use anyhow::Result;
use soundbank::{
    manifest_from_str, Channel, ClipHandle, ClipLoadError, Mixer, ParameterNotFound, PlaybackHost,
    SoundBank, VolumeSettings, AMBIENCE_VOLUME, MASTER_VOLUME, MUSIC_VOLUME, SOUND_VOLUME,
};
use tracing::info;

const DEMO_MANIFEST: &str = r#"
{
  "sound_effects": [
    { "name": "test sound 1", "asset": "sounds/test1.wav" },
    { "name": "test sound 2", "asset": "sounds/test2.wav" },
    { "name": "test sound 3", "asset": "sounds/test3.wav" }
  ],
  "music_tracks": [
    { "name": "test music 1", "asset": "music/test1.ogg" },
    { "name": "test music 2", "asset": "music/test2.ogg" },
    { "name": "test music 3", "asset": "music/test3.ogg" }
  ],
  "ambience_tracks": [
    { "name": "test ambience 1", "asset": "ambience/test1.ogg" },
    { "name": "test ambience 2", "asset": "ambience/test2.ogg" },
    { "name": "test ambience 3", "asset": "ambience/test3.ogg" }
  ]
}
"#;

/// Playback host that narrates every request instead of producing audio.
#[derive(Default)]
struct ConsoleHost {
    next_handle: u64,
}

impl PlaybackHost for ConsoleHost {
    fn load_clip(&mut self, asset: &str) -> Result<ClipHandle, ClipLoadError> {
        self.next_handle += 1;
        let clip = ClipHandle(self.next_handle);
        info!("Loaded {asset} as {clip:?}");
        Ok(clip)
    }

    fn play_one_shot(&mut self, channel: Channel, clip: ClipHandle, volume: f32) {
        info!("One-shot {clip:?} on the {channel} channel at volume {volume}");
    }

    fn set_channel_clip(&mut self, channel: Channel, clip: ClipHandle) {
        info!("{channel} channel now holds {clip:?}");
    }

    fn set_channel_loop(&mut self, channel: Channel, looping: bool) {
        info!("{channel} channel looping: {looping}");
    }

    fn start_channel(&mut self, channel: Channel) {
        info!("{channel} channel started");
    }
}

/// Mixer that accepts the four standard parameters and narrates writes.
struct ConsoleMixer;

impl Mixer for ConsoleMixer {
    fn set_parameter(&mut self, name: &str, value: f32) -> Result<(), ParameterNotFound> {
        match name {
            MASTER_VOLUME | SOUND_VOLUME | MUSIC_VOLUME | AMBIENCE_VOLUME => {
                info!("Mixer parameter {name} set to {value}");
                Ok(())
            }
            _ => Err(ParameterNotFound {
                name: name.to_string(),
            }),
        }
    }
}

fn main() -> Result<()> {
    // Default to INFO so the narration is visible (override via RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting soundbank-demo v{}", env!("CARGO_PKG_VERSION"));

    let manifest = manifest_from_str(DEMO_MANIFEST)?;
    let mut bank = SoundBank::new(ConsoleHost::default(), ConsoleMixer);
    bank.init(manifest)?;

    // One of each request kind, shuffling across the demo variants.
    bank.play_sound(&["test sound 1", "test sound 2", "test sound 3"])?;
    bank.play_song(true, &["test music 1", "test music 2", "test music 3"])?;
    bank.play_ambience(true, &["test ambience 1", "test ambience 2", "test ambience 3"])?;

    // Load persisted slider positions (defaults when absent) and push them
    // through the mixer.
    let settings = VolumeSettings::load();
    settings.apply(&mut bank)?;

    info!("Demo complete");
    Ok(())
}
