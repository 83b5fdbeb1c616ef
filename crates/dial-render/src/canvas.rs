//! Pixel canvas drawn into the terminal with half-block cells.

use dial_core::{Point, Size};
use image::{Rgba, RgbaImage};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Glyph whose foreground paints the upper pixel and background the lower one.
const UPPER_HALF_BLOCK: &str = "▀";

/// An RGBA frame buffer with one pixel per terminal column and two per row.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Create a transparent canvas of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            pixels: RgbaImage::new(size.width, size.height),
        }
    }

    /// Canvas size needed to cover a terminal area.
    pub fn size_for(area: Rect) -> Size {
        Size::new(u32::from(area.width), u32::from(area.height) * 2)
    }

    pub fn size(&self) -> Size {
        Size::new(self.pixels.width(), self.pixels.height())
    }

    /// Reallocate if the size changed. Contents are undefined afterwards.
    pub fn resize(&mut self, size: Size) {
        if self.size() != size {
            self.pixels = RgbaImage::new(size.width, size.height);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.pixels.width() && y < self.pixels.height() {
            Some(*self.pixels.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Paint every pixel with `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
    }

    /// Alpha-blend `image` with its top-left corner at `origin`, clipped to the canvas.
    pub fn blit(&mut self, image: &RgbaImage, origin: Point) {
        let (width, height) = (self.pixels.width() as i64, self.pixels.height() as i64);
        for (x, y, source) in image.enumerate_pixels() {
            let cx = i64::from(origin.x) + i64::from(x);
            let cy = i64::from(origin.y) + i64::from(y);
            if cx < 0 || cy < 0 || cx >= width || cy >= height {
                continue;
            }
            let target = self.pixels.get_pixel_mut(cx as u32, cy as u32);
            *target = blend(*target, *source);
        }
    }

    /// Paint a filled circle. Only pixels inside the canvas are visited.
    pub fn fill_circle(&mut self, center: Point, radius: i32, color: Rgba<u8>) {
        let radius = i64::from(radius.max(0));
        let radius_sq = radius * radius;
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let (width, height) = (self.pixels.width() as i64, self.pixels.height() as i64);
        for y in (cy - radius).max(0)..(cy + radius + 1).min(height) {
            for x in (cx - radius).max(0)..(cx + radius + 1).min(width) {
                let (dx, dy) = (x - cx, y - cy);
                if dx * dx + dy * dy > radius_sq {
                    continue;
                }
                let target = self.pixels.get_pixel_mut(x as u32, y as u32);
                *target = blend(*target, color);
            }
        }
    }
}

/// Source-over blend of `source` onto `target`.
fn blend(target: Rgba<u8>, source: Rgba<u8>) -> Rgba<u8> {
    let alpha = u16::from(source[3]);
    match alpha {
        0 => target,
        255 => source,
        _ => {
            let mix =
                |s: u8, t: u8| ((u16::from(s) * alpha + u16::from(t) * (255 - alpha)) / 255) as u8;
            let out_alpha = alpha + u16::from(target[3]) * (255 - alpha) / 255;
            Rgba([
                mix(source[0], target[0]),
                mix(source[1], target[1]),
                mix(source[2], target[2]),
                out_alpha.min(255) as u8,
            ])
        }
    }
}

fn to_color(pixel: Rgba<u8>) -> Color {
    Color::Rgb(pixel[0], pixel[1], pixel[2])
}

impl Widget for &Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let (x, y) = (u32::from(col), u32::from(row) * 2);
                let (Some(upper), Some(lower)) = (self.pixel(x, y), self.pixel(x, y + 1)) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF_BLOCK)
                        .set_fg(to_color(upper))
                        .set_bg(to_color(lower));
                }
            }
        }
    }
}
