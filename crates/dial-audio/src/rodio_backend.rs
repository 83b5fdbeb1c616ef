//! Playback through the default output device.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::{backend::AudioBackend, error::AudioError};

/// Plays tracks with `rodio`. One sink per track.
pub struct RodioBackend {
    /// Keeps the device open; dropping it silences every sink.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|err| AudioError::Device(err.to_string()))?;
        log::info!("opened default audio output device");
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
        })
    }
}

impl AudioBackend for RodioBackend {
    fn play(&mut self, path: &Path) -> Result<(), AudioError> {
        self.stop();

        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|err| AudioError::Decode {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let sink = Sink::try_new(&self.handle).map_err(|err| AudioError::Device(err.to_string()))?;
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}
