use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// No audio output device could be opened.
    #[error("audio output unavailable: {0}")]
    Output(String),

    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Play/pause was requested before any track was loaded.
    #[error("nothing loaded; pick a track first")]
    NothingLoaded,

    #[error("the catalog is empty")]
    EmptyCatalog,

    #[error("no track at index {0}")]
    NoSuchTrack(usize),
}
