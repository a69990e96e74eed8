//! Codec seams used by the compressor.
//!
//! The search loop only needs two operations from the outside world: turn
//! bytes into pixels once, and turn pixels into a candidate of some size many
//! times. [`ImageCodec`] implements both on top of the `image` crate.

use crate::decode::{decode_image, DecodeError, DecodedImage};
use crate::encode::{encode_candidate, Candidate, EncodeError, EncodeOptions};
use crate::ImageFormat;

/// Turns encoded bytes of a declared format into pixels.
pub trait Decoder {
    fn decode(&self, bytes: &[u8], format: ImageFormat) -> Result<DecodedImage, DecodeError>;
}

/// Produces a candidate encoding at a scale and quality in `[0, 1]`.
///
/// The compressor assumes output size does not decrease as scale and quality
/// increase together; bisection relies on it.
pub trait Encoder {
    fn encode(
        &self,
        image: &DecodedImage,
        scale: f64,
        quality: f64,
        format: ImageFormat,
    ) -> Result<Candidate, EncodeError>;
}

impl<T: Decoder + ?Sized> Decoder for &T {
    fn decode(&self, bytes: &[u8], format: ImageFormat) -> Result<DecodedImage, DecodeError> {
        (**self).decode(bytes, format)
    }
}

impl<T: Encoder + ?Sized> Encoder for &T {
    fn encode(
        &self,
        image: &DecodedImage,
        scale: f64,
        quality: f64,
        format: ImageFormat,
    ) -> Result<Candidate, EncodeError> {
        (**self).encode(image, scale, quality, format)
    }
}

/// Default codec backed by the `image` crate (and libwebp for lossy WebP).
///
/// Holds only immutable settings, so one instance can serve any number of
/// concurrent runs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImageCodec {
    options: EncodeOptions,
}

impl ImageCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }
}

impl Decoder for ImageCodec {
    fn decode(&self, bytes: &[u8], format: ImageFormat) -> Result<DecodedImage, DecodeError> {
        decode_image(bytes, format)
    }
}

impl Encoder for ImageCodec {
    fn encode(
        &self,
        image: &DecodedImage,
        scale: f64,
        quality: f64,
        format: ImageFormat,
    ) -> Result<Candidate, EncodeError> {
        encode_candidate(image, scale, quality, format, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::FilterType;
    use crate::fixtures;

    #[test]
    fn test_image_codec_round_trip() {
        let codec = ImageCodec::new();
        let source = fixtures::encoded_png(30, 20);

        let image = codec.decode(&source, ImageFormat::Png).unwrap();
        let candidate = codec.encode(&image, 1.0, 1.0, ImageFormat::Png).unwrap();

        assert_eq!(candidate.dimensions, (30, 20));
        let again = codec.decode(&candidate.bytes, ImageFormat::Png).unwrap();
        assert_eq!(again.pixels, image.pixels);
    }

    #[test]
    fn test_image_codec_uses_options() {
        let options = EncodeOptions {
            resize_filter: FilterType::Nearest,
            avif_speed: 8,
        };
        let codec = ImageCodec::with_options(options);
        assert_eq!(codec.options(), &options);
    }

    #[test]
    fn test_codec_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImageCodec>();
    }

    #[test]
    fn test_reference_forwards() {
        let codec = ImageCodec::new();
        let by_ref = &codec;
        let source = fixtures::encoded_png(4, 4);

        assert!(Decoder::decode(&by_ref, &source, ImageFormat::Png).is_ok());
    }
}
