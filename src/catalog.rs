//! Track catalog: the fixed, ordered list of playable tracks.
//!
//! The catalog is built once at startup from a TOML manifest (the bundled one
//! by default) and shared read-only by the list view and the player.

mod load;
mod model;

pub use load::CatalogError;
pub use model::*;
