use std::thread;
use std::time::Duration;

use crate::catalog::{Catalog, Track};

use super::backend::{PlaybackBackend, PlaybackHandle};
use super::error::PlayerError;
use super::types::{PlaybackSnapshot, PlaybackStatus, TransportIcon};

const FADE_STEPS: u32 = 20;

/// The single playback slot. Only `Playing` and `Paused` hold a handle.
enum Session<H> {
    Empty,
    Playing { track: usize, handle: H },
    Paused { track: usize, handle: H },
    Stopped { track: usize },
}

impl<H> Session<H> {
    fn track(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::Playing { track, .. } | Self::Paused { track, .. } | Self::Stopped { track } => {
                Some(*track)
            }
        }
    }
}

/// Owns at most one playback handle and the next/previous cursor.
pub struct PlaybackController<B: PlaybackBackend> {
    backend: B,
    catalog: Catalog,
    session: Session<B::Handle>,
    cursor: usize,
    volume: f32,
}

impl<B: PlaybackBackend> PlaybackController<B> {
    pub fn new(backend: B, catalog: Catalog, volume: f32) -> Self {
        Self {
            backend,
            catalog,
            session: Session::Empty,
            cursor: 0,
            volume,
        }
    }

    /// Start the track at `index` from the beginning.
    ///
    /// The current handle is released before the new one is opened. On
    /// failure the controller is left `Empty` with the cursor on `index`.
    pub fn play(&mut self, index: usize) -> Result<(), PlayerError> {
        let track = self
            .catalog
            .get(index)
            .ok_or(PlayerError::NoSuchTrack(index))?
            .clone();

        self.release_current();
        self.session = Session::Empty;
        self.cursor = index;

        let mut handle = self.backend.open(&track).inspect_err(|e| {
            tracing::warn!(index, title = %track.title, error = %e, "failed to load track");
        })?;
        handle.play();
        self.session = Session::Playing {
            track: index,
            handle,
        };
        tracing::info!(index, title = %track.title, artist = %track.artist, "playing");
        Ok(())
    }

    /// Pause if playing; otherwise nothing happens.
    pub fn pause(&mut self) {
        self.session = match std::mem::replace(&mut self.session, Session::Empty) {
            Session::Playing { track, mut handle } => {
                handle.pause();
                tracing::debug!(track, "paused");
                Session::Paused { track, handle }
            }
            other => other,
        };
    }

    /// Continue a paused track, or replay a stopped one from the start.
    pub fn resume(&mut self) -> Result<(), PlayerError> {
        match std::mem::replace(&mut self.session, Session::Empty) {
            Session::Paused { track, mut handle } => {
                handle.play();
                tracing::debug!(track, "resumed");
                self.session = Session::Playing { track, handle };
                Ok(())
            }
            Session::Stopped { track } => self.play(track),
            Session::Empty => Err(PlayerError::NothingLoaded),
            playing @ Session::Playing { .. } => {
                self.session = playing;
                Ok(())
            }
        }
    }

    pub fn toggle_play_pause(&mut self) -> Result<(), PlayerError> {
        if self.is_playing() {
            self.pause();
            Ok(())
        } else {
            self.resume()
        }
    }

    /// Move the cursor forward (wrapping) and play that track.
    pub fn next(&mut self) -> Result<(), PlayerError> {
        let len = self.catalog.len();
        if len == 0 {
            return Err(PlayerError::EmptyCatalog);
        }
        self.play((self.cursor + 1) % len)
    }

    /// Move the cursor back (wrapping) and play that track.
    pub fn previous(&mut self) -> Result<(), PlayerError> {
        let len = self.catalog.len();
        if len == 0 {
            return Err(PlayerError::EmptyCatalog);
        }
        self.play((self.cursor + len - 1) % len)
    }

    /// Release the handle, remembering which track it was.
    pub fn stop(&mut self) {
        let track = self.session.track();
        self.release_current();
        self.session = match track {
            Some(track) => Session::Stopped { track },
            None => Session::Empty,
        };
    }

    /// Check whether the playing track has reached its end. Returns true on
    /// the turn the track completes; playback does not advance on its own.
    pub fn poll_completion(&mut self) -> bool {
        let finished = matches!(&self.session, Session::Playing { handle, .. } if handle.is_finished());
        if finished {
            if let Some(track) = self.session.track() {
                tracing::info!(track, "track finished");
            }
            self.stop();
        }
        finished
    }

    /// Teardown: fade out over `fade_out` when playing, then release the
    /// handle whatever state it is in.
    pub fn shutdown(&mut self, fade_out: Duration) {
        if let Session::Playing { handle, .. } = &mut self.session {
            if !fade_out.is_zero() {
                let step = fade_out / FADE_STEPS;
                for i in 1..=FADE_STEPS {
                    let t = i as f32 / FADE_STEPS as f32;
                    handle.set_volume(self.volume * (1.0 - t));
                    thread::sleep(step);
                }
            }
        }
        self.release_current();
        self.session = Session::Empty;
        tracing::debug!("playback shut down");
    }

    pub fn status(&self) -> PlaybackStatus {
        match self.session {
            Session::Empty => PlaybackStatus::Empty,
            Session::Playing { .. } => PlaybackStatus::Playing,
            Session::Paused { .. } => PlaybackStatus::Paused,
            Session::Stopped { .. } => PlaybackStatus::Stopped,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.session, Session::Playing { .. })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Catalog index of the loaded or last loaded track.
    pub fn current_index(&self) -> Option<usize> {
        self.session.track()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_index().and_then(|i| self.catalog.get(i))
    }

    pub fn transport_icon(&self) -> TransportIcon {
        if self.is_playing() {
            TransportIcon::Pause
        } else {
            TransportIcon::Play
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            status: self.status(),
            track: self.current_index(),
            icon: self.transport_icon(),
        }
    }

    fn release_current(&mut self) {
        match std::mem::replace(&mut self.session, Session::Empty) {
            Session::Playing { track, handle } | Session::Paused { track, handle } => {
                handle.release();
                self.session = Session::Stopped { track };
            }
            other => self.session = other,
        }
    }
}
