//! Image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;

use super::{DecodeError, DecodedImage, Orientation};
use crate::ImageFormat;

/// Decode image bytes of a declared format into RGBA pixels.
///
/// JPEG input has its EXIF orientation applied, so the decoded image is
/// upright the way a browser would draw it.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` for AVIF when the `avif-decode`
/// feature is off, `DecodeError::CorruptedFile` if the bytes do not decode
/// as the declared format, and `DecodeError::InvalidDimensions` for a
/// zero-sized result.
pub fn decode_image(bytes: &[u8], format: ImageFormat) -> Result<DecodedImage, DecodeError> {
    #[cfg(not(feature = "avif-decode"))]
    if format == ImageFormat::Avif {
        return Err(DecodeError::UnsupportedFormat(format));
    }

    let img = image::load_from_memory_with_format(bytes, format.to_image_format())
        .map_err(|e| match e {
            image::ImageError::Unsupported(_) => DecodeError::UnsupportedFormat(format),
            other => DecodeError::CorruptedFile(other.to_string()),
        })?;

    let img = match format {
        ImageFormat::Jpeg => apply_orientation(img, extract_orientation(bytes)),
        _ => img,
    };

    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::InvalidDimensions {
            width: img.width(),
            height: img.height(),
        });
    }

    log::trace!(
        "decoded {} source: {}x{}",
        format,
        img.width(),
        img.height()
    );

    Ok(DecodedImage::from_rgba_image(img.into_rgba8()))
}

/// Extract EXIF orientation from JPEG bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_decode_png() {
        let bytes = fixtures::encoded_png(20, 10);
        let img = decode_image(&bytes, ImageFormat::Png).unwrap();

        assert_eq!(img.width, 20);
        assert_eq!(img.height, 10);
        assert_eq!(img.pixels.len(), 20 * 10 * 4);
        assert!(!img.has_alpha);
    }

    #[test]
    fn test_decode_jpeg() {
        let bytes = fixtures::encoded_jpeg(16, 8);
        let img = decode_image(&bytes, ImageFormat::Jpeg).unwrap();

        assert_eq!((img.width, img.height), (16, 8));
    }

    #[test]
    fn test_decode_declared_format_mismatch() {
        let png = fixtures::encoded_png(8, 8);
        let result = decode_image(&png, ImageFormat::Jpeg);

        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_garbage() {
        let result = decode_image(b"not an image", ImageFormat::Png);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[], ImageFormat::Webp).is_err());
    }

    #[cfg(not(feature = "avif-decode"))]
    #[test]
    fn test_decode_avif_without_feature() {
        let result = decode_image(&[0u8; 32], ImageFormat::Avif);
        assert!(matches!(
            result,
            Err(DecodeError::UnsupportedFormat(ImageFormat::Avif))
        ));
    }

    #[test]
    fn test_orientation_extraction_no_exif() {
        let bytes = fixtures::encoded_jpeg(4, 4);
        assert_eq!(extract_orientation(&bytes), Orientation::Normal);
    }

    #[test]
    fn test_orientation_extraction_invalid_data() {
        assert_eq!(extract_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb_img = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb_img);

        let result = apply_orientation(img, Orientation::Rotate90CW).into_rgb8();

        assert_eq!(result.dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb_img = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb_img);

        let result = apply_orientation(img, Orientation::FlipHorizontal).into_rgb8();

        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0]);
    }
}
