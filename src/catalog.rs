//! Name-to-clip catalogs, one per playback channel.

use std::collections::HashMap;

use tracing::debug;

use crate::config::ClipDef;
use crate::host::{Channel, ClipHandle, PlaybackHost};
use crate::AudioError;

/// Immutable name-to-handle mapping for one channel family.
///
/// Built once at initialization; lookups after that are plain map reads.
#[derive(Debug, Clone, Default)]
pub struct ClipCatalog {
    clips: HashMap<String, ClipHandle>,
}

impl ClipCatalog {
    /// Resolve `defs` through the host, in list order.
    ///
    /// The first unresolvable asset or duplicate name fails the whole
    /// catalog.
    pub(crate) fn resolve<H: PlaybackHost>(
        host: &mut H,
        channel: Channel,
        defs: Vec<ClipDef>,
    ) -> Result<Self, AudioError> {
        let mut clips = HashMap::with_capacity(defs.len());
        for def in defs {
            if clips.contains_key(&def.name) {
                return Err(AudioError::DuplicateClip {
                    channel,
                    name: def.name,
                });
            }
            let clip = host.load_clip(&def.asset)?;
            clips.insert(def.name, clip);
        }
        debug!("Registered {} {} clips", clips.len(), channel);
        Ok(Self { clips })
    }

    /// Look up a clip handle by name.
    pub fn get(&self, name: &str) -> Option<ClipHandle> {
        self.clips.get(name).copied()
    }

    /// Number of registered clips.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// True when no clips are registered.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// The three catalogs the bank dispatches against.
#[derive(Debug, Clone, Default)]
pub(crate) struct CatalogSet {
    pub sound_effects: ClipCatalog,
    pub music: ClipCatalog,
    pub ambience: ClipCatalog,
}

impl CatalogSet {
    /// Catalog backing the supplied channel.
    pub fn channel(&self, channel: Channel) -> &ClipCatalog {
        match channel {
            Channel::SoundEffect => &self.sound_effects,
            Channel::Music => &self.music,
            Channel::Ambience => &self.ambience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::RecordingHost;

    fn defs(entries: &[(&str, &str)]) -> Vec<ClipDef> {
        entries
            .iter()
            .map(|(name, asset)| ClipDef::new(*name, *asset))
            .collect()
    }

    #[test]
    fn resolve_builds_catalog_in_order() {
        let mut host = RecordingHost::new();
        let catalog = ClipCatalog::resolve(
            &mut host,
            Channel::SoundEffect,
            defs(&[("boom", "sounds/boom.wav"), ("click", "sounds/click.wav")]),
        )
        .expect("catalog should build");

        assert_eq!(catalog.len(), 2);
        // Handles are issued in list order.
        assert_eq!(catalog.get("boom"), Some(ClipHandle(1)));
        assert_eq!(catalog.get("click"), Some(ClipHandle(2)));
        assert_eq!(catalog.get("thud"), None);
    }

    #[test]
    fn resolve_rejects_duplicate_names() {
        let mut host = RecordingHost::new();
        let err = ClipCatalog::resolve(
            &mut host,
            Channel::Music,
            defs(&[("theme", "music/a.ogg"), ("theme", "music/b.ogg")]),
        )
        .expect_err("duplicate name should be rejected");

        assert!(matches!(
            err,
            AudioError::DuplicateClip {
                channel: Channel::Music,
                ref name,
            } if name == "theme"
        ));
    }

    #[test]
    fn resolve_surfaces_load_failures() {
        let mut host = RecordingHost::new();
        host.fail_asset("sounds/missing.wav");
        let err = ClipCatalog::resolve(
            &mut host,
            Channel::Ambience,
            defs(&[("wind", "sounds/missing.wav")]),
        )
        .expect_err("unresolvable asset should fail the catalog");

        assert!(matches!(err, AudioError::ClipLoad(_)));
    }

    #[test]
    fn empty_catalog_reports_empty() {
        let catalog = ClipCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
