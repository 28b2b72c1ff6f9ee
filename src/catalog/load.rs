use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::CatalogSettings;

use super::model::{AudioLocator, Catalog, Track};

/// The manifest compiled into the binary.
const BUNDLED_MANIFEST: &str = include_str!("../../assets/catalog.toml");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "track")]
    tracks: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    title: String,
    #[serde(default)]
    artist: String,
    file: PathBuf,
}

impl Catalog {
    /// Build the catalog that ships with the binary. Audio files are looked up
    /// under `assets_dir`.
    pub fn bundled(assets_dir: &Path) -> Result<Self, CatalogError> {
        Self::from_manifest_str(BUNDLED_MANIFEST, assets_dir)
    }

    /// Parse a manifest. Relative `file` entries are joined onto `assets_dir`;
    /// absolute ones are kept as they are.
    pub fn from_manifest_str(src: &str, assets_dir: &Path) -> Result<Self, CatalogError> {
        let manifest: Manifest = toml::from_str(src)?;
        let tracks = manifest
            .tracks
            .into_iter()
            .map(|e| {
                Track::new(
                    e.title.trim(),
                    e.artist.trim(),
                    AudioLocator::new(assets_dir.join(e.file)),
                )
            })
            .collect();
        Ok(Self::new(tracks))
    }

    pub fn from_manifest_path(path: &Path, assets_dir: &Path) -> Result<Self, CatalogError> {
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest_str(&src, assets_dir)
    }

    /// Load the catalog selected by `settings`: the configured manifest when
    /// set, the bundled one otherwise.
    pub fn load(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let catalog = match &settings.manifest {
            Some(path) => Self::from_manifest_path(path, &settings.assets_dir)?,
            None => Self::bundled(&settings.assets_dir)?,
        };
        tracing::info!(
            tracks = catalog.len(),
            assets_dir = %settings.assets_dir.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
