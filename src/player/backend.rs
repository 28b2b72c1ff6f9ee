use crate::catalog::Track;

use super::error::PlayerError;

/// One loaded audio stream.
///
/// A handle is created paused. Dropping it must stop its audio; `release`
/// does so explicitly.
pub trait PlaybackHandle {
    fn play(&mut self);
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
    /// True once the stream has played to its end.
    fn is_finished(&self) -> bool;
    fn release(self);
}

/// Opens playback handles for catalog tracks.
pub trait PlaybackBackend {
    type Handle: PlaybackHandle;

    fn open(&mut self, track: &Track) -> Result<Self::Handle, PlayerError>;
}
