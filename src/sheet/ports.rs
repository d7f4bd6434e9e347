//! Seams between the sheet and the rest of the app. Everything the sheet
//! touches on the outside goes through one of these, so tests can plug in
//! fakes and the sheet stays free of app globals.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::action::PlayerPanel;
use crate::model::MediaEntity;

/// A flag-flip or deletion request, dispatched fire-and-forget against the
/// active plugin. The receiving end performs the call and reports failures
/// upward; the sheet never awaits the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Like { track_id: String, liked: bool },
    Hide { track_id: String, hidden: bool },
    Follow { artist_id: String, following: bool },
    Save { entity_id: String, saved: bool },
    DeletePlaylist { playlist_id: String },
}

/// User-visible, non-fatal message for the toast surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// Playback surface of the app: queue operations, radio, and the adjunct
/// panels of the full player.
pub trait PlayerPort: Send + Sync {
    fn play(&self, plugin_id: &str, entity: &MediaEntity, loaded: bool);
    fn add_to_next(&self, plugin_id: &str, entity: &MediaEntity, loaded: bool);
    fn add_to_queue(&self, plugin_id: &str, entity: &MediaEntity, loaded: bool);
    fn start_radio(&self, plugin_id: &str, entity: &MediaEntity);
    fn open_panel(&self, panel: PlayerPanel);
    /// Collapse the expanded player so a newly opened screen is visible.
    fn collapse(&self);
}

/// Opens the detail screen of a related entity.
pub trait Navigator: Send + Sync {
    fn open(&self, plugin_id: &str, entity: &MediaEntity);
}

/// Async share-link lookup owned by the active plugin. May fail or never
/// complete; the caller owns cancellation.
pub trait ShareUrlProvider: Send + Sync {
    fn share_url(&self, entity: &MediaEntity) -> BoxFuture<'static, anyhow::Result<String>>;
}

/// Platform share surface (system chooser).
pub trait ShareSink: Send + Sync {
    fn present(&self, title: &str, text: &str);
}

/// Everything a [`MenuSheet`](super::MenuSheet) needs from its host.
pub struct SheetPorts {
    pub player: Arc<dyn PlayerPort>,
    pub navigator: Arc<dyn Navigator>,
    /// `None` when the active plugin has no share support wired up.
    pub share_provider: Option<Arc<dyn ShareUrlProvider>>,
    pub share_sink: Arc<dyn ShareSink>,
    pub mutations: tokio::sync::mpsc::UnboundedSender<Mutation>,
    pub notices: tokio::sync::mpsc::UnboundedSender<Notice>,
}
