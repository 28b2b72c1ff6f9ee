use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the audio data for a track lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioLocator(PathBuf);

impl AudioLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub locator: AudioLocator,
}

impl Track {
    pub fn new(title: &str, artist: &str, locator: AudioLocator) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            locator,
        }
    }
}

/// Immutable, cheaply clonable list of tracks in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Arc<[Track]>,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks: tracks.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
