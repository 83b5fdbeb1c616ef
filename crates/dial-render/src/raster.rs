//! Image rotation.

use dial_core::{Point, Size, centered_origin, rotated_bounds, screen_rotation};
use image::RgbaImage;

/// Rotate `image` counterclockwise by `degrees` about its center.
///
/// The result is the full bounding box of the rotated image. Pixels that do
/// not map back onto the source are transparent. Sampling is nearest
/// neighbour.
pub fn rotate(image: &RgbaImage, degrees: f64) -> RgbaImage {
    let source = Size::new(image.width(), image.height());
    let bounds = rotated_bounds(source, degrees);
    let mut rotated = RgbaImage::new(bounds.width, bounds.height);

    let (sin, cos) = degrees.to_radians().sin_cos();
    let (src_w, src_h) = (f64::from(source.width), f64::from(source.height));
    let (src_cx, src_cy) = (src_w / 2.0, src_h / 2.0);
    let dst_cx = f64::from(bounds.width) / 2.0;
    let dst_cy = f64::from(bounds.height) / 2.0;

    for (x, y, pixel) in rotated.enumerate_pixels_mut() {
        let dx = f64::from(x) + 0.5 - dst_cx;
        let dy = f64::from(y) + 0.5 - dst_cy;

        // Inverse of a counterclockwise turn on a y-down grid.
        let sx = dx * cos - dy * sin + src_cx;
        let sy = dx * sin + dy * cos + src_cy;

        if sx >= 0.0 && sy >= 0.0 && sx < src_w && sy < src_h {
            *pixel = *image.get_pixel(sx as u32, sy as u32);
        }
    }

    rotated
}

/// Rotate a hand image to `angle_deg` (clockwise from 12 o'clock) and place it on `pivot`.
///
/// Returns the rotated image and the top-left origin at which to draw it so
/// that its bounding box is centered on `pivot`.
pub fn position_rotated_image(
    image: &RgbaImage,
    angle_deg: f64,
    pivot: Point,
) -> (RgbaImage, Point) {
    let rotated = rotate(image, screen_rotation(angle_deg));
    let origin = centered_origin(Size::new(rotated.width(), rotated.height()), pivot);
    (rotated, origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    /// A 1x2 hand: red tip on top, blue tail below.
    fn tiny_hand() -> RgbaImage {
        let mut hand = RgbaImage::new(1, 2);
        hand.put_pixel(0, 0, RED);
        hand.put_pixel(0, 1, BLUE);
        hand
    }

    /// A 5x21 hand pointing up with a red tip row.
    fn tall_hand() -> RgbaImage {
        let mut hand = RgbaImage::from_pixel(5, 21, BLUE);
        for x in 0..5 {
            hand.put_pixel(x, 0, RED);
        }
        hand
    }

    #[test]
    fn test_rotate_zero_is_identity() {
        let hand = tall_hand();
        assert_eq!(rotate(&hand, 0.0), hand);
    }

    #[test]
    fn test_rotate_counterclockwise_quarter() {
        let rotated = rotate(&tiny_hand(), 90.0);
        assert_eq!(rotated.dimensions(), (2, 1));
        assert_eq!(*rotated.get_pixel(0, 0), RED);
        assert_eq!(*rotated.get_pixel(1, 0), BLUE);
    }

    #[test]
    fn test_hand_at_three_points_right() {
        let (rotated, _) = position_rotated_image(&tiny_hand(), 90.0, Point::new(10, 10));
        assert_eq!(rotated.dimensions(), (2, 1));
        assert_eq!(*rotated.get_pixel(1, 0), RED);
        assert_eq!(*rotated.get_pixel(0, 0), BLUE);
    }

    #[test]
    fn test_hand_at_six_points_down() {
        let (rotated, _) = position_rotated_image(&tiny_hand(), 180.0, Point::new(10, 10));
        assert_eq!(rotated.dimensions(), (1, 2));
        assert_eq!(*rotated.get_pixel(0, 1), RED);
    }

    #[test]
    fn test_diagonal_leaves_transparent_corners() {
        let rotated = rotate(&tall_hand(), 45.0);
        assert!(rotated.width() > 5);
        assert_eq!(rotated.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_rotated_image_centered_on_pivot() {
        let hand = tall_hand();
        let pivot = Point::new(80, 24);
        for second in 0..60 {
            let angle = f64::from(second) * 6.0;
            let (rotated, origin) = position_rotated_image(&hand, angle, pivot);
            let center_x = f64::from(origin.x) + f64::from(rotated.width()) / 2.0;
            let center_y = f64::from(origin.y) + f64::from(rotated.height()) / 2.0;
            assert!((center_x - 80.0).abs() <= 1.0, "angle {angle}");
            assert!((center_y - 24.0).abs() <= 1.0, "angle {angle}");
        }
    }
}
