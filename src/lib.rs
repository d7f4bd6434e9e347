pub mod model;
pub mod capability;
pub mod action;
pub mod resolver;
pub mod error;
pub mod sheet;

pub use action::{toggle, Action, Effect, Glyph, IconSpec, PlayerPanel};
pub use capability::{Capability, CapabilitySet};
pub use error::MenuError;
pub use model::{AlbumRef, ArtistRef, Category, MediaEntity};
pub use resolver::{resolve, ResolverContext};
pub use sheet::MenuSheet;
