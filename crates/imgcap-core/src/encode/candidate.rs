//! Produce a candidate encoding at a given scale and quality.

use serde::{Deserialize, Serialize};

use super::types::quality_percent;
use super::{avif, jpeg, png, webp, Candidate, EncodeError};
use crate::decode::{resize_by_scale, DecodedImage, FilterType};
use crate::ImageFormat;

/// Codec settings that stay fixed across a compression run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Filter used when downscaling the source for a candidate.
    pub resize_filter: FilterType,
    /// rav1e speed preset for AVIF output (1-10, higher is faster).
    pub avif_speed: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            resize_filter: FilterType::Bilinear,
            avif_speed: 10,
        }
    }
}

/// Encode `image` scaled by `scale` at `quality` (both in `[0, 1]`).
///
/// Dimensions become `round(edge * scale)` with a one pixel floor. Quality is
/// mapped onto the codec's 1-100 range; PNG ignores it.
pub fn encode_candidate(
    image: &DecodedImage,
    scale: f64,
    quality: f64,
    format: ImageFormat,
    options: &EncodeOptions,
) -> Result<Candidate, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let scaled = resize_by_scale(image, scale, options.resize_filter).map_err(|e| {
        EncodeError::EncodingFailed {
            format,
            message: e.to_string(),
        }
    })?;
    let (width, height) = (scaled.width, scaled.height);
    let q = quality_percent(quality);

    let bytes = match format {
        ImageFormat::Jpeg => jpeg::encode_jpeg(&scaled.pixels, width, height, q)?,
        ImageFormat::Png => png::encode_png(&scaled.pixels, width, height, scaled.has_alpha)?,
        ImageFormat::Webp => {
            webp::encode_webp(&scaled.pixels, width, height, scaled.has_alpha, q)?
        }
        ImageFormat::Avif => avif::encode_avif(
            &scaled.pixels,
            width,
            height,
            scaled.has_alpha,
            q,
            options.avif_speed,
        )?,
    };

    Ok(Candidate::new(bytes, format, scale, (width, height)))
}
