use serde::{Deserialize, Serialize};

/// An optional feature surface the active plugin may declare 🔌
///
/// Capabilities are queried, never assumed: a missing capability silently
/// drops the dependent actions instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    TrackPlayable,
    RadioCapable,
    SaveToLibrary,
    LibraryFeed,
    Share,
    TrackLike,
    TrackHide,
    ArtistFollow,
}

const CAPABILITY_COUNT: usize = 8;

impl Capability {
    fn index(self) -> usize {
        match self {
            Capability::TrackPlayable => 0,
            Capability::RadioCapable => 1,
            Capability::SaveToLibrary => 2,
            Capability::LibraryFeed => 3,
            Capability::Share => 4,
            Capability::TrackLike => 5,
            Capability::TrackHide => 6,
            Capability::ArtistFollow => 7,
        }
    }
}

/// The set of capabilities declared by one plugin. Any subset is valid,
/// including none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilitySet {
    declared: [bool; CAPABILITY_COUNT],
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, cap: Capability) -> Self {
        self.declared[cap.index()] = true;
        self
    }

    /// O(1) predicate: does the plugin declare `cap`?
    pub fn supports(&self, cap: Capability) -> bool {
        self.declared[cap.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.declared.iter().all(|&d| !d)
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}
