//! JPEG candidate encoding.
//!
//! JPEG has no alpha channel, so transparent regions are composited onto
//! black before encoding.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::types::{flatten_rgba, validate_rgba};
use super::EncodeError;
use crate::ImageFormat;

/// Encode RGBA pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100, clamped)
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    validate_rgba(pixels, width, height)?;

    let quality = quality.clamp(1, 100);
    let rgb = flatten_rgba(pixels);

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: ImageFormat::Jpeg,
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Encoding always produces a valid JPEG for valid input.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            width in 1u32..=40,
            height in 1u32..=40,
            quality in 1u8..=100,
            value in any::<u8>(),
        ) {
            let pixels = vec![value; (width * height * 4) as usize];
            let jpeg = encode_jpeg(&pixels, width, height, quality).unwrap();

            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&jpeg[jpeg.len() - 2..], &[0xFF, 0xD9]);
        }

        /// Property: Same input always produces same output.
        #[test]
        fn prop_deterministic_output(
            width in 1u32..=20,
            height in 1u32..=20,
            quality in 1u8..=100,
        ) {
            let pixels = vec![100u8; (width * height * 4) as usize];

            let first = encode_jpeg(&pixels, width, height, quality).unwrap();
            let second = encode_jpeg(&pixels, width, height, quality).unwrap();

            prop_assert_eq!(first, second);
        }

        /// Property: Mismatched pixel data length always returns an error.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            width in 1u32..=30,
            height in 1u32..=30,
            delta in prop_oneof![-8i64..=-1, 1i64..=8],
        ) {
            let expected = (width * height * 4) as i64;
            let actual = (expected + delta).max(0) as usize;
            prop_assume!(actual as i64 != expected);

            let pixels = vec![128u8; actual];
            let result = encode_jpeg(&pixels, width, height, 80);

            prop_assert!(
                matches!(result, Err(EncodeError::InvalidPixelData { .. })),
                "Mismatched pixel data should return InvalidPixelData"
            );
        }
    }
}
