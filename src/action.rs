use serde::{Deserialize, Serialize};

use crate::model::MediaEntity;

/// Static glyphs bundled with the app. The UI maps these to real assets;
/// the resolver only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Glyph {
    Play,
    PlaylistPlay,
    PlaylistAdd,
    Equalizer,
    Snooze,
    HighQuality,
    HeartOutline,
    HeartFilled,
    HideOutline,
    HideFilled,
    Sensors,
    LibraryMusic,
    BookmarkOutline,
    BookmarkFilled,
    Delete,
    DownloadForOffline,
    Forward,
    Artist,
    Person,
    Album,
}

/// Icon of an action: either a bundled glyph or a remote image with a
/// fallback glyph. Portraits of people are masked circular, album covers
/// stay rectangular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconSpec {
    Glyph(Glyph),
    Remote {
        url: Option<String>,
        fallback: Glyph,
        circular: bool,
    },
}

/// Adjunct panels of the full-player surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPanel {
    AudioFx,
    SleepTimer,
    QualitySelection,
}

/// What invoking an action requests. Effects are plain data: the resolver
/// only names the request, the hosting sheet interprets it. Toggle effects
/// carry the *target* value of the flag, never the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Play,
    AddToNext,
    AddToQueue,
    OpenPanel(PlayerPanel),
    StartRadio,
    SetLiked(bool),
    SetHidden(bool),
    SetFollowing(bool),
    SetSaved(bool),
    DeletePlaylist,
    /// Declared stub: surfaces "not yet available" when invoked.
    SaveToPlaylist,
    /// Declared stub: surfaces "not yet available" when invoked.
    Download,
    OpenEntity(MediaEntity),
    Share,
}

/// One entry of the resolved menu 📋
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
    pub icon: IconSpec,
    pub effect: Effect,
}

impl Action {
    pub fn glyph(label: &str, glyph: Glyph, effect: Effect) -> Self {
        Self {
            label: label.to_string(),
            icon: IconSpec::Glyph(glyph),
            effect,
        }
    }

    pub fn remote(
        label: &str,
        url: Option<String>,
        fallback: Glyph,
        circular: bool,
        effect: Effect,
    ) -> Self {
        Self {
            label: label.to_string(),
            icon: IconSpec::Remote {
                url,
                fallback,
                circular,
            },
            effect,
        }
    }
}

/// Pick between two mutually exclusive actions based on a live flag.
///
/// `on` is emitted while the flag is set (its effect requests clearing it),
/// `off` while it is not. The caller never flips the flag itself; the
/// chosen action's effect asks an external channel to do it, and the next
/// resolve picks up the observed new value.
pub fn toggle(flag: bool, on: Action, off: Action) -> Action {
    if flag {
        on
    } else {
        off
    }
}
