//! PNG candidate encoding.
//!
//! PNG is lossless: there is no quality knob, so the encoded size is driven
//! by pixel dimensions alone.

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use std::io::Cursor;

use super::types::{strip_alpha, validate_rgba};
use super::EncodeError;
use crate::ImageFormat;

/// Encode RGBA pixel data to PNG bytes.
///
/// Opaque images are written as RGB to avoid storing a constant alpha plane.
pub fn encode_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    has_alpha: bool,
) -> Result<Vec<u8>, EncodeError> {
    validate_rgba(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Default, PngFilter::Adaptive);

    let result = if has_alpha {
        encoder.write_image(pixels, width, height, ExtendedColorType::Rgba8)
    } else {
        let rgb = strip_alpha(pixels);
        encoder.write_image(&rgb, width, height, ExtendedColorType::Rgb8)
    };

    result.map_err(|e| EncodeError::EncodingFailed {
        format: ImageFormat::Png,
        message: e.to_string(),
    })?;

    Ok(buffer.into_inner())
}
