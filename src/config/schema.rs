use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/minitune/config.toml` or `~/.config/minitune/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MINITUNE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Playback volume applied to every new track (1.0 = unchanged).
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Which track fields make up the now-playing label, and in what order.
    ///
    /// Example: ["artist", "title"]
    pub now_playing_track_fields: Vec<TrackDisplayField>,

    /// Separator used to join `now_playing_track_fields`.
    pub now_playing_track_separator: String,

    /// Capture the mouse so rows and transport buttons can be clicked.
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ minitune ~ ".to_string(),
            now_playing_track_fields: vec![TrackDisplayField::Title],
            now_playing_track_separator: " - ".to_string(),
            mouse: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackDisplayField {
    Title,
    Artist,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Directory the manifest's `file` entries are resolved against.
    pub assets_dir: PathBuf,
    /// Optional manifest replacing the bundled track list.
    pub manifest: Option<PathBuf>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            manifest: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file path. Defaults to `$XDG_STATE_HOME/minitune/minitune.log`.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive, overridden by `MINITUNE_LOG`.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "minitune=info".to_string(),
        }
    }
}
