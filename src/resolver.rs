//! The action resolver: a pure function from entity + capabilities + live
//! context to the ordered menu. It performs no I/O and never mutates its
//! inputs; the hosting sheet re-invokes it whenever any input changes.

use serde::{Deserialize, Serialize};

use crate::action::{toggle, Action, Effect, Glyph, PlayerPanel};
use crate::capability::{Capability, CapabilitySet};
use crate::model::{ArtistRef, Category, MediaEntity, OFFLINE_SOURCE_ID};

/// Live state snapshot supplied alongside the entity.
///
/// While `loaded` is false only a summary of the entity has been fetched,
/// so every action that reads a live boolean flag is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolverContext {
    pub loaded: bool,
    pub from_player: bool,
    pub queue_size: usize,
    pub saved_to_library: bool,
}

/// Compute the ordered action list for `entity`.
///
/// `caps` is `None` when no plugin is connected; that behaves exactly like
/// an empty capability set. The composition order is a contract:
/// play affordances, then variant-specific actions, then sub-entity
/// shortcuts in source order, then Share last.
pub fn resolve(
    entity: &MediaEntity,
    caps: Option<&CapabilitySet>,
    ctx: &ResolverContext,
) -> Vec<Action> {
    let caps = caps.copied().unwrap_or_default();
    let mut actions = match entity {
        MediaEntity::Track {
            album,
            artists,
            is_liked,
            is_hidden,
            ..
        } => {
            let mut out = track_lead_actions(&caps, ctx);
            out.extend(like_action(&caps, ctx, *is_liked));
            out.extend(hide_action(&caps, ctx, *is_hidden));
            out.extend(radio_action(&caps, ctx));
            out.extend(save_to_playlist_action(&caps));
            out.extend(save_to_library_action(&caps, ctx));
            out.extend(download_action(&caps, entity));
            out.extend(album.as_ref().map(|a| {
                Action::remote(
                    &a.title,
                    a.cover.clone(),
                    Glyph::Album,
                    false,
                    Effect::OpenEntity(a.to_entity()),
                )
            }));
            out.extend(artist_shortcuts(artists, Glyph::Artist));
            out
        }

        MediaEntity::Album { artists, .. } => {
            let mut out = play_actions(&caps, entity.category(), ctx);
            out.extend(radio_action(&caps, ctx));
            out.extend(save_to_playlist_action(&caps));
            out.extend(save_to_library_action(&caps, ctx));
            out.extend(download_action(&caps, entity));
            out.extend(artist_shortcuts(artists, Glyph::Artist));
            out
        }

        MediaEntity::Playlist {
            authors,
            is_editable,
            ..
        } => {
            let mut out = play_actions(&caps, entity.category(), ctx);
            out.extend(radio_action(&caps, ctx));
            out.extend(save_to_playlist_action(&caps));
            out.extend(save_to_library_action(&caps, ctx));
            out.extend(download_action(&caps, entity));
            if caps.supports(Capability::LibraryFeed) && *is_editable {
                out.push(Action::glyph(
                    "Delete playlist",
                    Glyph::Delete,
                    Effect::DeletePlaylist,
                ));
            }
            out.extend(artist_shortcuts(authors, Glyph::Person));
            out
        }

        MediaEntity::Radio { .. } => {
            let mut out = play_actions(&caps, entity.category(), ctx);
            out.extend(save_to_library_action(&caps, ctx));
            out
        }

        MediaEntity::Artist { is_following, .. } => {
            let mut out = radio_action(&caps, ctx).into_iter().collect::<Vec<_>>();
            out.extend(save_to_library_action(&caps, ctx));
            out.extend(follow_action(&caps, ctx, *is_following));
            out
        }

        MediaEntity::User { .. } => Vec::new(),
    };

    actions.extend(share_action(&caps, ctx));
    actions
}

/// Transport affordances. Lists and Track play; Profile entities never get
/// transport controls here.
fn play_actions(caps: &CapabilitySet, category: Category, ctx: &ResolverContext) -> Vec<Action> {
    let playable = match category {
        Category::Track | Category::Lists => true,
        Category::Profile => false,
    };
    if !playable || !caps.supports(Capability::TrackPlayable) {
        return Vec::new();
    }
    let mut out = vec![Action::glyph("Play", Glyph::Play, Effect::Play)];
    if ctx.queue_size > 0 {
        out.push(Action::glyph(
            "Add to next",
            Glyph::PlaylistPlay,
            Effect::AddToNext,
        ));
    }
    if ctx.queue_size > 1 {
        out.push(Action::glyph(
            "Add to queue",
            Glyph::PlaylistAdd,
            Effect::AddToQueue,
        ));
    }
    out
}

/// Lead group for tracks. Inside the full player the transport controls
/// already exist around the sheet, so the group is replaced by the three
/// adjunct panel actions.
fn track_lead_actions(caps: &CapabilitySet, ctx: &ResolverContext) -> Vec<Action> {
    if !ctx.from_player {
        return play_actions(caps, Category::Track, ctx);
    }
    vec![
        Action::glyph(
            "Audio effects",
            Glyph::Equalizer,
            Effect::OpenPanel(PlayerPanel::AudioFx),
        ),
        Action::glyph(
            "Sleep timer",
            Glyph::Snooze,
            Effect::OpenPanel(PlayerPanel::SleepTimer),
        ),
        Action::glyph(
            "Quality selection",
            Glyph::HighQuality,
            Effect::OpenPanel(PlayerPanel::QualitySelection),
        ),
    ]
}

fn like_action(caps: &CapabilitySet, ctx: &ResolverContext, is_liked: bool) -> Option<Action> {
    // Inside the full player the like affordance lives in the transport
    // area, not here.
    if !caps.supports(Capability::TrackLike) || !ctx.loaded || ctx.from_player {
        return None;
    }
    Some(toggle(
        is_liked,
        Action::glyph("Unlike", Glyph::HeartFilled, Effect::SetLiked(false)),
        Action::glyph("Like", Glyph::HeartOutline, Effect::SetLiked(true)),
    ))
}

fn hide_action(caps: &CapabilitySet, ctx: &ResolverContext, is_hidden: bool) -> Option<Action> {
    if !caps.supports(Capability::TrackHide) || !ctx.loaded {
        return None;
    }
    Some(toggle(
        is_hidden,
        Action::glyph("Unhide", Glyph::HideFilled, Effect::SetHidden(false)),
        Action::glyph("Hide", Glyph::HideOutline, Effect::SetHidden(true)),
    ))
}

fn follow_action(
    caps: &CapabilitySet,
    ctx: &ResolverContext,
    is_following: bool,
) -> Option<Action> {
    if !caps.supports(Capability::ArtistFollow) || !ctx.loaded {
        return None;
    }
    Some(toggle(
        is_following,
        Action::glyph("Unfollow", Glyph::HeartFilled, Effect::SetFollowing(false)),
        Action::glyph("Follow", Glyph::HeartOutline, Effect::SetFollowing(true)),
    ))
}

fn save_to_library_action(caps: &CapabilitySet, ctx: &ResolverContext) -> Option<Action> {
    if !caps.supports(Capability::SaveToLibrary) || !ctx.loaded {
        return None;
    }
    Some(toggle(
        ctx.saved_to_library,
        Action::glyph(
            "Remove from library",
            Glyph::BookmarkFilled,
            Effect::SetSaved(false),
        ),
        Action::glyph(
            "Save to library",
            Glyph::BookmarkOutline,
            Effect::SetSaved(true),
        ),
    ))
}

fn radio_action(caps: &CapabilitySet, ctx: &ResolverContext) -> Option<Action> {
    if !caps.supports(Capability::RadioCapable) || !ctx.loaded {
        return None;
    }
    Some(Action::glyph("Radio", Glyph::Sensors, Effect::StartRadio))
}

fn save_to_playlist_action(caps: &CapabilitySet) -> Option<Action> {
    if !caps.supports(Capability::LibraryFeed) {
        return None;
    }
    Some(Action::glyph(
        "Save to playlist",
        Glyph::LibraryMusic,
        Effect::SaveToPlaylist,
    ))
}

fn download_action(caps: &CapabilitySet, entity: &MediaEntity) -> Option<Action> {
    // Items that already come from the offline plugin are not offered again.
    if !caps.supports(Capability::TrackPlayable) || entity.source_id() == Some(OFFLINE_SOURCE_ID) {
        return None;
    }
    Some(Action::glyph(
        "Download",
        Glyph::DownloadForOffline,
        Effect::Download,
    ))
}

fn share_action(caps: &CapabilitySet, ctx: &ResolverContext) -> Option<Action> {
    if !caps.supports(Capability::Share) || !ctx.loaded {
        return None;
    }
    Some(Action::glyph("Share", Glyph::Forward, Effect::Share))
}

/// Navigation shortcuts to referenced people, in source order. These are
/// never capability-gated: following a reference needs no plugin feature.
fn artist_shortcuts<'a>(
    artists: &'a [ArtistRef],
    fallback: Glyph,
) -> impl Iterator<Item = Action> + 'a {
    artists.iter().map(move |artist| {
        Action::remote(
            &artist.name,
            artist.cover.clone(),
            fallback,
            true,
            Effect::OpenEntity(artist.to_entity()),
        )
    })
}
