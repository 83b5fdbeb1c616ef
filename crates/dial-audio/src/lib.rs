//! Background music for the dial clock.
//!
//! A fixed, ordered [`Playlist`] is driven by the [`AudioRequest`]s that the
//! core update step emits. Output goes through an [`AudioBackend`]: the
//! [`SilentBackend`] is always available, the `rodio` backend only with the
//! `audio` feature.
//!
//! [`AudioRequest`]: dial_core::AudioRequest

mod backend;
mod error;
mod jukebox;
mod playlist;
#[cfg(feature = "audio")]
mod rodio_backend;

pub use backend::{AudioBackend, SilentBackend};
pub use error::{AudioError, PlayError};
pub use jukebox::Jukebox;
pub use playlist::Playlist;
#[cfg(feature = "audio")]
pub use rodio_backend::RodioBackend;

/// The best backend this build supports.
///
/// Falls back to [`SilentBackend`] when no output device can be opened.
pub fn default_backend() -> Box<dyn AudioBackend> {
    #[cfg(feature = "audio")]
    match RodioBackend::new() {
        Ok(backend) => return Box::new(backend),
        Err(err) => log::warn!("{err}; music will not be audible"),
    }
    Box::new(SilentBackend)
}
