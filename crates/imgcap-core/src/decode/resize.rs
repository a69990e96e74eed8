//! Scale-factor resizing for candidate encodings.
//!
//! The search parameter drives image dimensions linearly, so every candidate
//! is drawn from the decoded source at `round(dim * scale)`.

use std::borrow::Cow;

use super::{DecodeError, DecodedImage, FilterType};

/// Compute the dimensions of an image scaled by `scale`.
///
/// Each edge is `round(edge * scale)`, clamped to at least one pixel so the
/// smallest candidate is still encodable. Scales above 1 are clamped to 1.
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let scale = if scale.is_finite() {
        scale.clamp(0.0, 1.0)
    } else {
        1.0
    };
    let edge = |len: u32| ((f64::from(len) * scale).round() as u32).clamp(1, len.max(1));
    (edge(width), edge(height))
}

/// Resize an image to exact dimensions.
///
/// Returns the source unchanged (borrowed) when the dimensions already match.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` for a zero target dimension and
/// `DecodeError::CorruptedFile` if the source pixel buffer does not match its
/// declared dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Cow<'_, DecodedImage>, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just borrow
    if image.width == width && image.height == height {
        return Ok(Cow::Borrowed(image));
    }

    let view = image
        .as_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Pixel buffer size mismatch".to_string()))?;

    let resized = image::imageops::resize(&view, width, height, filter.to_image_filter());

    Ok(Cow::Owned(DecodedImage::from_rgba_image(resized)))
}

/// Resize an image by a linear scale factor in `[0, 1]`.
pub fn resize_by_scale(
    image: &DecodedImage,
    scale: f64,
    filter: FilterType,
) -> Result<Cow<'_, DecodedImage>, DecodeError> {
    let (width, height) = scaled_dimensions(image.width, image.height, scale);
    resize(image, width, height, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_scaled_dimensions_rounding() {
        assert_eq!(scaled_dimensions(200, 200, 0.5), (100, 100));
        assert_eq!(scaled_dimensions(200, 100, 0.1875), (38, 19));
        // 0.25 * 10 = 2.5 rounds half away from zero
        assert_eq!(scaled_dimensions(10, 10, 0.25), (3, 3));
    }

    #[test]
    fn test_scaled_dimensions_never_zero() {
        assert_eq!(scaled_dimensions(200, 100, 0.0), (1, 1));
        assert_eq!(scaled_dimensions(200, 100, 1e-9), (1, 1));
    }

    #[test]
    fn test_scaled_dimensions_clamps_scale() {
        assert_eq!(scaled_dimensions(64, 32, 1.0), (64, 32));
        assert_eq!(scaled_dimensions(64, 32, 4.0), (64, 32));
        assert_eq!(scaled_dimensions(64, 32, f64::NAN), (64, 32));
    }

    #[test]
    fn test_resize_basic() {
        let img = fixtures::noise_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions_borrows() {
        let img = fixtures::noise_image(40, 20);
        let resized = resize(&img, 40, 20, FilterType::Bilinear).unwrap();

        assert!(matches!(resized, Cow::Borrowed(_)));
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = fixtures::noise_image(10, 10);

        assert!(resize(&img, 0, 5, FilterType::Bilinear).is_err());
        assert!(resize(&img, 5, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_by_scale() {
        let img = fixtures::noise_image(200, 100);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize_by_scale(&img, 0.25, filter).unwrap();
            assert_eq!((resized.width, resized.height), (50, 25));
        }
    }
}
