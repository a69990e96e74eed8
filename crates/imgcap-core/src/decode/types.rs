//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ImageFormat;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No decoder for this format is compiled in.
    #[error("Decoding {0} images is not supported in this build")]
    UnsupportedFormat(ImageFormat),

    /// The image file is corrupted, truncated, or not the declared format.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The decoded image has a zero dimension.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded image with RGBA pixel data.
///
/// Decoded once per compression run and only read afterwards; every
/// candidate encoding is produced from this buffer.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
    /// Whether any pixel is not fully opaque.
    pub has_alpha: bool,
}

impl DecodedImage {
    /// Create a new DecodedImage from RGBA pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        let has_alpha = pixels.chunks_exact(4).any(|px| px[3] != u8::MAX);
        Self {
            width,
            height,
            pixels,
            has_alpha,
        }
    }

    /// Create a DecodedImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Borrow the pixel buffer as an image::RgbaImage view.
    pub fn as_rgba_image(&self) -> Option<image::ImageBuffer<image::Rgba<u8>, &[u8]>> {
        image::ImageBuffer::from_raw(self.width, self.height, self.pixels.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_decoded_image_opaque() {
        let img = DecodedImage::new(4, 2, vec![255u8; 4 * 2 * 4]);

        assert!(!img.has_alpha);
        assert_eq!(img.as_rgba_image().unwrap().dimensions(), (4, 2));
    }

    #[test]
    fn test_decoded_image_detects_alpha() {
        let mut pixels = vec![255u8; 2 * 2 * 4];
        pixels[7] = 128; // second pixel half transparent
        let img = DecodedImage::new(2, 2, pixels);

        assert!(img.has_alpha);
    }

    #[test]
    fn test_rgba_view_rejects_short_buffer() {
        let img = DecodedImage {
            width: 4,
            height: 4,
            pixels: vec![0u8; 10],
            has_alpha: false,
        };
        assert!(img.as_rgba_image().is_none());
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnsupportedFormat(ImageFormat::Avif);
        assert_eq!(
            err.to_string(),
            "Decoding image/avif images is not supported in this build"
        );

        let err = DecodeError::CorruptedFile("unexpected EOF".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: unexpected EOF");
    }
}
