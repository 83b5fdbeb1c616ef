//! Executes audio requests against a backend.

use dial_core::{AudioRequest, PlayCue};

use crate::{
    backend::AudioBackend,
    error::{AudioError, PlayError},
    playlist::Playlist,
};

/// Owns the backend and the playlist and turns requests into status messages.
pub struct Jukebox {
    backend: Box<dyn AudioBackend>,
    playlist: Playlist,
}

impl Jukebox {
    pub fn new(backend: Box<dyn AudioBackend>, playlist: Playlist) -> Self {
        Self { backend, playlist }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Carry out `request` and describe what happened.
    ///
    /// A failed play is logged and returned; the caller should mark its
    /// playback state as unloaded.
    pub fn handle(&mut self, request: AudioRequest) -> Result<String, PlayError> {
        let message = match request {
            AudioRequest::Play { track, cue } => {
                let name = self.start(track).map_err(|source| {
                    let err = PlayError {
                        what: load_label(cue),
                        source,
                    };
                    log::error!("{err}");
                    err
                })?;
                match cue {
                    PlayCue::Start => format!("Playing: {name}"),
                    PlayCue::Next => format!("Playing next: {name}"),
                    PlayCue::Previous => format!("Playing previous: {name}"),
                }
            }
            AudioRequest::Pause => {
                self.backend.pause();
                "Music paused".to_string()
            }
            AudioRequest::Resume => {
                self.backend.resume();
                "Music unpaused".to_string()
            }
            AudioRequest::Stop => {
                self.backend.stop();
                "Music stopped".to_string()
            }
        };
        log::info!("{message}");
        Ok(message)
    }

    fn start(&mut self, track: usize) -> Result<String, AudioError> {
        let path = self.playlist.path(track).ok_or(AudioError::NoTrack(track))?;
        self.backend.play(path)?;
        Ok(self.playlist.name(track).unwrap_or_default())
    }
}

fn load_label(cue: PlayCue) -> &'static str {
    match cue {
        PlayCue::Start => "music",
        PlayCue::Next => "next track",
        PlayCue::Previous => "previous track",
    }
}
