//! Core types for the dial clock application.
//!
//! Everything in this crate is free of terminal, image and audio
//! dependencies: hand angles, canvas geometry and the application state
//! record with its update step.

mod angles;
mod geometry;
mod state;

pub use angles::{ClockTime, HandAngles, compute_angles};
pub use geometry::{HandTransform, Point, Size, centered_origin, rotated_bounds, screen_rotation};
pub use state::{AppState, AudioRequest, Ball, Command, Direction, PlayCue, Playback};
