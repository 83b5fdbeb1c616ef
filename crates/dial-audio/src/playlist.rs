//! Ordered list of track files.

use std::path::{Path, PathBuf};

/// Track files in play order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<PathBuf>,
}

impl Playlist {
    /// Resolve track `names` against `dir`. Absolute names are kept as given.
    pub fn new<S: AsRef<str>>(dir: &Path, names: &[S]) -> Self {
        Self {
            tracks: names.iter().map(|name| dir.join(name.as_ref())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn path(&self, index: usize) -> Option<&Path> {
        self.tracks.get(index).map(PathBuf::as_path)
    }

    /// Display name (file name) of the track at `index`.
    pub fn name(&self, index: usize) -> Option<String> {
        self.path(index).map(file_name)
    }

    /// File names of tracks that do not exist on disk.
    pub fn missing(&self) -> Vec<String> {
        self.tracks
            .iter()
            .filter(|path| !path.exists())
            .map(|path| file_name(path))
            .collect()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
