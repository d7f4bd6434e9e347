use thiserror::Error;

/// Failures surfaced by the menu sheet when dispatching an action.
///
/// Capability absence is never an error (the action simply does not
/// resolve), and a failed handler never invalidates the resolved list.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Declared stub actions (save-to-playlist, download) resolve into the
    /// menu but are not wired to a real handler yet.
    #[error("this action is not available yet")]
    NotYetAvailable,

    /// The mutation channel receiver has been dropped, so toggle requests
    /// can no longer be delivered.
    #[error("mutation channel closed")]
    MutationChannelClosed,

    /// No share-url provider is connected for the active plugin.
    #[error("sharing is not available for this plugin")]
    ShareUnavailable,
}
