//! Audio output seam.

use std::fs::File;
use std::path::Path;

use crate::error::AudioError;

/// Something that can play one track at a time.
pub trait AudioBackend {
    /// Stop whatever is playing and start `path` from the beginning.
    fn play(&mut self, path: &Path) -> Result<(), AudioError>;

    /// Pause the current track.
    fn pause(&mut self);

    /// Resume a paused track.
    fn resume(&mut self);

    /// Stop and unload the current track.
    fn stop(&mut self);
}

/// Backend without an output device.
///
/// Still opens each track so a missing or unreadable file is reported the
/// same way a real device would report it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn play(&mut self, path: &Path) -> Result<(), AudioError> {
        File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("silent backend accepted {}", path.display());
        Ok(())
    }

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn stop(&mut self) {}
}
