//! Audio error types.

use std::io;
use std::path::PathBuf;

/// A backend or playlist failure.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("no track at index {0}")]
    NoTrack(usize),
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("audio device unavailable: {0}")]
    Device(String),
}

/// A track that could not be started.
#[derive(Debug, thiserror::Error)]
#[error("Error loading {what}: {source}")]
pub struct PlayError {
    /// Which kind of load failed ("music", "next track", "previous track").
    pub what: &'static str,
    #[source]
    pub source: AudioError,
}
