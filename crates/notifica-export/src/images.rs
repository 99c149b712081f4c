use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use genpdf::elements::Image;
use genpdf::error::Error;
use genpdf::{Alignment, Scale};
use image::{DynamicImage, GenericImageView};

use crate::error::ImageError;

/// Resolution `genpdf` assumes when sizing an image without an explicit DPI.
pub const IMAGE_DPI: f64 = 300.0;

/// Height that keeps the source aspect ratio at `target_width`.
///
/// A zero pixel width yields a zero height rather than dividing by zero.
pub fn scaled_height(target_width: f64, pixel_width: u32, pixel_height: u32) -> f64 {
    if pixel_width == 0 {
        return 0.0;
    }
    target_width * f64::from(pixel_height) / f64::from(pixel_width)
}

/// Rendered `(width, height)` for an image of `pixels` placed at `width`.
///
/// When the proportional height exceeds `max_height` the height is capped and
/// the width shrinks with it, so the aspect ratio is kept.
pub fn fit(pixels: (u32, u32), width: f64, max_height: f64) -> (f64, f64) {
    let height = scaled_height(width, pixels.0, pixels.1);
    if height <= max_height || height <= 0.0 {
        return (width, height);
    }
    (width * max_height / height, max_height)
}

/// Decode a base64 payload into raw bytes.
///
/// Accepts an optional `data:<mime>;base64,` prefix and ignores embedded
/// whitespace (line-wrapped base64 is common in JSON produced by forms).
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, ImageError> {
    let payload = match encoded.trim_start().strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .unwrap_or(rest),
        None => encoded,
    };
    let cleaned: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(cleaned)?)
}

/// Parse PNG or JPEG bytes. Alpha is flattened away since PDF images here
/// carry no soft mask.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    let image = image::load_from_memory(bytes)?;
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Empty);
    }
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

pub fn load_image_file(path: &Path) -> Result<DynamicImage, ImageError> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

/// Wrap `image` as a document element exactly `width` millimetres wide.
pub fn embed(image: DynamicImage, width: f64, alignment: Alignment) -> Result<Image, Error> {
    let (pixel_width, _) = image.dimensions();
    let natural_width = f64::from(pixel_width) * 25.4 / IMAGE_DPI;
    let factor = width / natural_width;
    Ok(Image::from_dynamic_image(image)?
        .with_scale(Scale::new(factor, factor))
        .with_alignment(alignment))
}
