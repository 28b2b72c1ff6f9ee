//! `rodio` implementation of the playback traits.
//!
//! Every handle is its own `Sink` connected to the mixer of one shared
//! default output stream.

use std::fs::File;
use std::io::BufReader;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use crate::catalog::Track;
use crate::config::AudioSettings;

use super::backend::{PlaybackBackend, PlaybackHandle};
use super::error::PlayerError;

pub struct RodioBackend {
    stream: OutputStream,
    volume: f32,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open_default(settings: &AudioSettings) -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::Output(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped, which garbles the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            volume: settings.volume,
        })
    }
}

impl PlaybackBackend for RodioBackend {
    type Handle = RodioHandle;

    fn open(&mut self, track: &Track) -> Result<RodioHandle, PlayerError> {
        let path = track.locator.path();
        let file = File::open(path).map_err(|source| PlayerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.set_volume(self.volume);
        sink.append(source);
        sink.pause();
        Ok(RodioHandle { sink })
    }
}

pub struct RodioHandle {
    sink: Sink,
}

impl PlaybackHandle for RodioHandle {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    fn release(self) {
        self.sink.stop();
    }
}
