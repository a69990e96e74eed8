//! Candidate encodings and encoder errors.

use thiserror::Error;

use crate::ImageFormat;

/// Errors that can occur while producing a candidate encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec rejected the image or parameters
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: ImageFormat,
        message: String,
    },
}

/// The result of one encode attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Encoded file bytes.
    pub bytes: Vec<u8>,
    /// Encoded size in bytes (`bytes.len()`).
    pub size: u64,
    /// Output format of `bytes`.
    pub format: ImageFormat,
    /// Search parameter that produced this candidate.
    pub parameter: f64,
    /// Pixel dimensions that were encoded.
    pub dimensions: (u32, u32),
}

impl Candidate {
    pub fn new(bytes: Vec<u8>, format: ImageFormat, parameter: f64, dimensions: (u32, u32)) -> Self {
        Self {
            size: bytes.len() as u64,
            bytes,
            format,
            parameter,
            dimensions,
        }
    }

    /// Absolute distance between this candidate's size and `target`.
    pub fn distance_to(&self, target: u64) -> u64 {
        self.size.abs_diff(target)
    }
}

/// Map a `[0, 1]` quality to the `1..=100` scale used by the codecs.
pub fn quality_percent(quality: f64) -> u8 {
    if !quality.is_finite() {
        return 100;
    }
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Check that an RGBA buffer matches its declared dimensions.
pub(crate) fn validate_rgba(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

/// Drop the alpha channel of an opaque RGBA buffer.
pub(crate) fn strip_alpha(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}

/// Drop the alpha channel, compositing onto black the way a canvas export
/// to an opaque format does.
pub(crate) fn flatten_rgba(pixels: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixels.len() / 4 * 3);
    for px in pixels.chunks_exact(4) {
        let alpha = u16::from(px[3]);
        for &channel in &px[..3] {
            rgb.push(((u16::from(channel) * alpha + 127) / 255) as u8);
        }
    }
    rgb
}
