//! Small value types describing the controller's state to the UI.

/// Coarse playback state of the controller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Nothing has been loaded yet.
    #[default]
    Empty,
    Playing,
    Paused,
    /// The last track finished or was stopped; its handle is released.
    Stopped,
}

/// Glyph shown on the play/pause button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransportIcon {
    Play,
    Pause,
}

impl TransportIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
        }
    }
}

/// Copy of the controller state taken once per frame for rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    pub status: PlaybackStatus,
    /// Catalog index of the loaded (or last loaded) track.
    pub track: Option<usize>,
    pub icon: TransportIcon,
}
