//! AVIF candidate encoding via the `image` crate's rav1e-backed encoder.

use image::codecs::avif::AvifEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::types::{strip_alpha, validate_rgba};
use super::EncodeError;
use crate::ImageFormat;

/// Encode RGBA pixel data to AVIF bytes.
///
/// `speed` is the rav1e speed preset (1 slowest to 10 fastest); `quality` is
/// on the 1-100 scale.
pub fn encode_avif(
    pixels: &[u8],
    width: u32,
    height: u32,
    has_alpha: bool,
    quality: u8,
    speed: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate_rgba(pixels, width, height)?;

    let mut buffer = Vec::new();
    let encoder =
        AvifEncoder::new_with_speed_quality(&mut buffer, speed.clamp(1, 10), quality.clamp(1, 100));

    let result = if has_alpha {
        encoder.write_image(pixels, width, height, ExtendedColorType::Rgba8)
    } else {
        let rgb = strip_alpha(pixels);
        encoder.write_image(&rgb, width, height, ExtendedColorType::Rgb8)
    };

    result.map_err(|e| EncodeError::EncodingFailed {
        format: ImageFormat::Avif,
        message: e.to_string(),
    })?;

    Ok(buffer)
}
