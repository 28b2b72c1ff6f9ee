//! In-memory playback backend for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::PathBuf;
use std::rc::Rc;

use crate::catalog::{AudioLocator, Catalog, Track};

use super::backend::{PlaybackBackend, PlaybackHandle};
use super::error::PlayerError;

/// Counters shared between a `FakeBackend`, its handles and the test body.
#[derive(Debug, Default)]
pub(crate) struct Probe {
    pub live: Cell<usize>,
    pub max_live: Cell<usize>,
    pub opened: RefCell<Vec<String>>,
    pub volumes: RefCell<Vec<f32>>,
    pub finish_next_poll: Cell<bool>,
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    pub probe: Rc<Probe>,
    pub broken: HashSet<PathBuf>,
}

impl FakeBackend {
    pub fn new() -> (Self, Rc<Probe>) {
        let backend = Self::default();
        let probe = backend.probe.clone();
        (backend, probe)
    }
}

impl PlaybackBackend for FakeBackend {
    type Handle = FakeHandle;

    fn open(&mut self, track: &Track) -> Result<FakeHandle, PlayerError> {
        let path = track.locator.path();
        if self.broken.contains(path) {
            return Err(PlayerError::Decode {
                path: path.to_path_buf(),
                message: "corrupt".into(),
            });
        }
        let live = self.probe.live.get() + 1;
        self.probe.live.set(live);
        self.probe.max_live.set(self.probe.max_live.get().max(live));
        self.probe.opened.borrow_mut().push(track.title.clone());
        Ok(FakeHandle {
            probe: self.probe.clone(),
        })
    }
}

pub(crate) struct FakeHandle {
    probe: Rc<Probe>,
}

impl PlaybackHandle for FakeHandle {
    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn set_volume(&mut self, volume: f32) {
        self.probe.volumes.borrow_mut().push(volume);
    }

    fn is_finished(&self) -> bool {
        self.probe.finish_next_poll.get()
    }

    fn release(self) {}
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.probe.live.set(self.probe.live.get() - 1);
    }
}

pub(crate) fn track(title: &str, artist: &str) -> Track {
    Track::new(
        title,
        artist,
        AudioLocator::new(format!("/assets/{}.mp3", title.to_lowercase())),
    )
}

/// The three bundled tracks, with fake locators.
pub(crate) fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        track("Hanya Lwa9t", "Abduh feat Ouenza"),
        track("Gatsby", "Akra"),
        track("Too Many Nights", "Metro Boomin"),
    ])
}
