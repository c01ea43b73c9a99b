use std::path::{Path, PathBuf};

use log::debug;

use crate::clients::{entities::Track, errors::Result};

/// Flat text dump of tracks, one `name artist` pair per line.
///
/// Names are written verbatim, so a name containing spaces or newlines
/// cannot be split back unambiguously.
pub struct TrackFile {
    path: PathBuf,
}

impl TrackFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TrackFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn render(tracks: &[Track]) -> String {
        tracks
            .iter()
            .map(|track| format!("{} {}\n", track.name, track.artist.name))
            .collect()
    }

    // Overwrites any existing file at the path
    pub async fn write(&self, tracks: &[Track]) -> Result<()> {
        tokio::fs::write(&self.path, Self::render(tracks)).await?;
        debug!("Wrote {} tracks to {:?}", tracks.len(), self.path);
        Ok(())
    }
}
