//! Frame composition.

use dial_core::{AppState, HandAngles, HandTransform, Size, centered_origin};
use image::Rgba;

use crate::{assets::ClockAssets, canvas::Canvas, raster::position_rotated_image};

/// Canvas color behind the clock.
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Color of the ball overlay.
pub const BALL_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Draw one frame: background, face, minute hand, second hand, ball.
pub fn compose(canvas: &mut Canvas, assets: &ClockAssets, state: &AppState, angles: HandAngles) {
    canvas.resize(state.surface);
    canvas.fill(BACKGROUND_COLOR);

    let face_size = Size::new(assets.face.width(), assets.face.height());
    canvas.blit(&assets.face, centered_origin(face_size, state.pivot));

    for (hand, transform) in [
        (&assets.minute_hand, HandTransform::new(angles.minute, state.pivot)),
        (&assets.second_hand, HandTransform::new(angles.second, state.pivot)),
    ] {
        let (rotated, origin) = position_rotated_image(hand, transform.angle_deg, transform.pivot);
        canvas.blit(&rotated, origin);
    }

    canvas.fill_circle(state.ball.center, state.ball.radius, BALL_COLOR);
}
