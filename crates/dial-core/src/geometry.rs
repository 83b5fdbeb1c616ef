//! Canvas geometry for placing rotated hand images.

/// Tolerance used when rounding rotated extents up to whole pixels.
const EXTENT_EPSILON: f64 = 1e-6;

/// A point in canvas pixels. The y axis points down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A size in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Point halfway across and a quarter of the way down.
    pub fn upper_anchor(self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 4) as i32)
    }

    /// Point halfway across and three quarters of the way down.
    pub fn lower_anchor(self) -> Point {
        Point::new(
            (self.width / 2) as i32,
            (u64::from(self.height) * 3 / 4) as i32,
        )
    }
}

/// Rotation of a hand about the clock center for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandTransform {
    /// Degrees clockwise from 12 o'clock.
    pub angle_deg: f64,
    /// Clock center in canvas pixels.
    pub pivot: Point,
}

impl HandTransform {
    pub fn new(angle_deg: f64, pivot: Point) -> Self {
        Self { angle_deg, pivot }
    }

    /// Counterclockwise screen rotation to apply to the hand image.
    pub fn screen_rotation(&self) -> f64 {
        screen_rotation(self.angle_deg)
    }
}

/// Convert a clockwise hand angle into a counterclockwise-positive screen rotation.
///
/// Image rotation on the canvas is counterclockwise for positive angles, while
/// hand angles grow clockwise, so the hand image is rotated by `-angle`.
/// Dropping the sign mirrors the motion of every hand.
pub fn screen_rotation(angle_deg: f64) -> f64 {
    -angle_deg
}

/// Bounding box of an image of `size` rotated by `degrees` about its center.
pub fn rotated_bounds(size: Size, degrees: f64) -> Size {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (w, h) = (f64::from(size.width), f64::from(size.height));

    let width = (w * cos).abs() + (h * sin).abs();
    let height = (w * sin).abs() + (h * cos).abs();

    Size::new(round_extent(width), round_extent(height))
}

fn round_extent(extent: f64) -> u32 {
    (extent - EXTENT_EPSILON).ceil().max(0.0) as u32
}

/// Top-left origin that centers a box of `size` on `pivot`.
pub fn centered_origin(size: Size, pivot: Point) -> Point {
    Point::new(
        pivot.x - (size.width / 2) as i32,
        pivot.y - (size.height / 2) as i32,
    )
}
