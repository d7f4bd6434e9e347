use serde::{Deserialize, Serialize};

/// Source id of the built-in local/offline plugin. Items that already come
/// from it are not offered for download again.
pub const OFFLINE_SOURCE_ID: &str = "offline";

/// Lightweight reference to an artist carried inside another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
    pub cover: Option<String>,
}

/// Lightweight reference to the album a track belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumRef {
    pub id: String,
    pub title: String,
    pub cover: Option<String>,
}

/// A media object the menu can act upon 🎵
///
/// Exactly one variant applies. Every match over this union is exhaustive
/// on purpose: adding a variant must break every dispatch site so that no
/// entity kind silently loses its actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaEntity {
    Track {
        id: String,
        title: String,
        album: Option<AlbumRef>,
        artists: Vec<ArtistRef>,
        is_liked: bool,
        is_hidden: bool,
        cover: Option<String>,
        source: Option<String>,
    },
    Album {
        id: String,
        title: String,
        artists: Vec<ArtistRef>,
        cover: Option<String>,
        source: Option<String>,
    },
    Playlist {
        id: String,
        title: String,
        authors: Vec<ArtistRef>,
        is_editable: bool,
        cover: Option<String>,
        source: Option<String>,
    },
    Radio {
        id: String,
        title: String,
        cover: Option<String>,
    },
    Artist {
        id: String,
        name: String,
        is_following: bool,
        cover: Option<String>,
    },
    User {
        id: String,
        name: String,
        cover: Option<String>,
    },
}

/// Super-category of an entity. Category membership decides which action
/// groups are even considered by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Track,
    Lists,
    Profile,
}

impl MediaEntity {
    pub fn category(&self) -> Category {
        match self {
            MediaEntity::Track { .. } => Category::Track,
            MediaEntity::Album { .. }
            | MediaEntity::Playlist { .. }
            | MediaEntity::Radio { .. } => Category::Lists,
            MediaEntity::Artist { .. } | MediaEntity::User { .. } => Category::Profile,
        }
    }

    /// Plugin-scoped id of the entity.
    pub fn id(&self) -> &str {
        match self {
            MediaEntity::Track { id, .. }
            | MediaEntity::Album { id, .. }
            | MediaEntity::Playlist { id, .. }
            | MediaEntity::Radio { id, .. }
            | MediaEntity::Artist { id, .. }
            | MediaEntity::User { id, .. } => id,
        }
    }

    /// Display title of the entity, used for the share chooser caption.
    pub fn title(&self) -> &str {
        match self {
            MediaEntity::Track { title, .. }
            | MediaEntity::Album { title, .. }
            | MediaEntity::Playlist { title, .. }
            | MediaEntity::Radio { title, .. } => title,
            MediaEntity::Artist { name, .. } | MediaEntity::User { name, .. } => name,
        }
    }

    /// Id of the plugin this entity originally came from, when known.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            MediaEntity::Track { source, .. }
            | MediaEntity::Album { source, .. }
            | MediaEntity::Playlist { source, .. } => source.as_deref(),
            MediaEntity::Radio { .. }
            | MediaEntity::Artist { .. }
            | MediaEntity::User { .. } => None,
        }
    }
}

impl ArtistRef {
    /// Summary entity for navigating to this artist. Live flags start out
    /// false until the target screen loads the full profile.
    pub fn to_entity(&self) -> MediaEntity {
        MediaEntity::Artist {
            id: self.id.clone(),
            name: self.name.clone(),
            is_following: false,
            cover: self.cover.clone(),
        }
    }
}

impl AlbumRef {
    pub fn to_entity(&self) -> MediaEntity {
        MediaEntity::Album {
            id: self.id.clone(),
            title: self.title.clone(),
            artists: Vec::new(),
            cover: self.cover.clone(),
            source: None,
        }
    }
}
