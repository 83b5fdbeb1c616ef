//! Clock face and hand images.

use std::path::{Path, PathBuf};

use image::{RgbaImage, imageops::FilterType};

/// File name of the clock face image.
pub const FACE_FILE: &str = "clock.png";

/// File name of the minute hand image.
pub const MINUTE_HAND_FILE: &str = "min_hand.png";

/// File name of the second hand image.
pub const SECOND_HAND_FILE: &str = "sec_hand.png";

/// Failure to load one of the required images.
#[derive(Debug, thiserror::Error)]
#[error("failed to load {}: {source}", path.display())]
pub struct AssetError {
    pub path: PathBuf,
    #[source]
    pub source: image::ImageError,
}

/// Decoded images for one clock.
///
/// Hands are drawn pointing at 12 o'clock, centered on the pivot of the face.
#[derive(Debug, Clone)]
pub struct ClockAssets {
    pub face: RgbaImage,
    pub minute_hand: RgbaImage,
    pub second_hand: RgbaImage,
}

impl ClockAssets {
    /// Load the face and hand images from `dir`, shrinking them so the face
    /// is at most `face_height` pixels tall.
    pub fn load(dir: &Path, face_height: u32) -> Result<Self, AssetError> {
        let face = load_image(&dir.join(FACE_FILE))?;
        let minute_hand = load_image(&dir.join(MINUTE_HAND_FILE))?;
        let second_hand = load_image(&dir.join(SECOND_HAND_FILE))?;
        Ok(Self::from_images(face, minute_hand, second_hand, face_height))
    }

    /// Build from decoded images, applying one shared scale factor so the
    /// hands keep their proportion to the face.
    pub fn from_images(
        face: RgbaImage,
        minute_hand: RgbaImage,
        second_hand: RgbaImage,
        face_height: u32,
    ) -> Self {
        let assets = Self {
            face,
            minute_hand,
            second_hand,
        };
        if face_height == 0 || assets.face.height() <= face_height {
            return assets;
        }

        let factor = f64::from(face_height) / f64::from(assets.face.height());
        log::debug!("scaling clock images by {factor:.3} to fit {face_height} pixel face");
        Self {
            face: scale(&assets.face, factor),
            minute_hand: scale(&assets.minute_hand, factor),
            second_hand: scale(&assets.second_hand, factor),
        }
    }
}

fn load_image(path: &Path) -> Result<RgbaImage, AssetError> {
    let image = image::open(path)
        .map_err(|source| AssetError {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    log::info!("loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

fn scale(image: &RgbaImage, factor: f64) -> RgbaImage {
    let width = ((f64::from(image.width()) * factor).round() as u32).max(1);
    let height = ((f64::from(image.height()) * factor).round() as u32).max(1);
    image::imageops::resize(image, width, height, FilterType::Triangle)
}
