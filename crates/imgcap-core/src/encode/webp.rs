//! WebP candidate encoding.
//!
//! With the `lossy-webp` feature (default) this goes through libwebp and the
//! quality parameter applies. Without it the `image` crate's lossless encoder
//! is used and only dimensions affect size.

use super::types::{strip_alpha, validate_rgba};
use super::EncodeError;
use crate::ImageFormat;

/// Encode RGBA pixel data to WebP bytes.
///
/// `quality` is on the 1-100 scale and is ignored by the lossless fallback.
#[cfg(feature = "lossy-webp")]
pub fn encode_webp(
    pixels: &[u8],
    width: u32,
    height: u32,
    has_alpha: bool,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate_rgba(pixels, width, height)?;

    let mut config = ::webp::WebPConfig::new().map_err(|_| EncodeError::EncodingFailed {
        format: ImageFormat::Webp,
        message: "failed to create WebPConfig".to_string(),
    })?;
    config.lossless = 0;
    config.quality = f32::from(quality.clamp(1, 100));

    let rgb;
    let encoder = if has_alpha {
        ::webp::Encoder::from_rgba(pixels, width, height)
    } else {
        rgb = strip_alpha(pixels);
        ::webp::Encoder::from_rgb(&rgb, width, height)
    };

    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| EncodeError::EncodingFailed {
            format: ImageFormat::Webp,
            message: format!("{e:?}"),
        })?;

    Ok(memory.to_vec())
}

#[cfg(not(feature = "lossy-webp"))]
pub fn encode_webp(
    pixels: &[u8],
    width: u32,
    height: u32,
    has_alpha: bool,
    _quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    use image::codecs::webp::WebPEncoder;
    use image::{ExtendedColorType, ImageEncoder};

    validate_rgba(pixels, width, height)?;

    let mut buffer = Vec::new();
    let encoder = WebPEncoder::new_lossless(&mut buffer);
    let result = if has_alpha {
        encoder.write_image(pixels, width, height, ExtendedColorType::Rgba8)
    } else {
        let rgb = strip_alpha(pixels);
        encoder.write_image(&rgb, width, height, ExtendedColorType::Rgb8)
    };

    result.map_err(|e| EncodeError::EncodingFailed {
        format: ImageFormat::Webp,
        message: e.to_string(),
    })?;

    Ok(buffer)
}
