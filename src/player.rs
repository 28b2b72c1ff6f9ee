//! Playback control: one owned playback handle, a cursor into the catalog,
//! and the play/pause/skip operations driven by the UI.
//!
//! The controller is generic over a [`PlaybackBackend`] so it can be driven
//! by `rodio` at runtime and by a fake backend in tests.

mod backend;
mod controller;
mod error;
mod rodio_backend;
mod types;

pub use backend::PlaybackBackend;
pub use controller::PlaybackController;
pub use error::PlayerError;
pub use rodio_backend::RodioBackend;
pub use types::*;

#[cfg(test)]
pub(crate) mod testing;
