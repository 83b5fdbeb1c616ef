//! Rendering for the dial clock.
//!
//! Hand images are rotated about their centers and composited onto a pixel
//! canvas together with the clock face and the ball overlay. The canvas is
//! drawn into the terminal two pixels per cell with upper half blocks.

mod assets;
mod canvas;
mod raster;
mod scene;

pub use assets::{AssetError, ClockAssets, FACE_FILE, MINUTE_HAND_FILE, SECOND_HAND_FILE};
pub use canvas::Canvas;
pub use raster::{position_rotated_image, rotate};
pub use scene::{BACKGROUND_COLOR, BALL_COLOR, compose};
