//! Size-targeting compression.
//!
//! A run validates the request, returns the input untouched when it is
//! already small enough in the right format, and otherwise decodes once and
//! bisects over a single parameter `t` that drives both output scale and
//! encoder quality until a candidate lands in the acceptance window.
//!
//! Runs share nothing: a [`Compressor`] holds only its codec and immutable
//! configuration, so one instance can serve concurrent callers.

mod config;
mod error;
mod request;
mod search;
mod window;

use std::borrow::Cow;

pub use config::{SearchConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_PRECISION};
pub use error::{CompressError, ValidationError};
pub use request::{
    CompressionRequest, CompressionResult, Outcome, MIN_TARGET_SIZE, MIN_TOLERANCE,
};
pub use search::{search, SearchInterval, SearchOutcome};
pub use window::{
    dynamic_tolerance, AcceptanceWindow, DYNAMIC_TOLERANCE_MAX, DYNAMIC_TOLERANCE_MIN,
};

use crate::codec::{Decoder, Encoder, ImageCodec};
use crate::decode::DecodedImage;
use crate::ImageFormat;

/// Drives the size search against a codec.
#[derive(Debug, Clone, Default)]
pub struct Compressor<C = ImageCodec> {
    codec: C,
    config: SearchConfig,
}

impl<C> Compressor<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }
}

impl<C: Decoder + Encoder> Compressor<C> {
    /// Compress `input` toward `request.target_size`.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before any codec call. Decoder and
    /// encoder errors abort the run as they occur.
    pub fn compress<'a>(
        &self,
        input: &'a [u8],
        input_format: ImageFormat,
        request: &CompressionRequest,
    ) -> Result<CompressionResult<'a>, CompressError> {
        request.validate()?;
        let output_format = request.resolve_output(input_format);

        if input.len() as u64 <= request.target_size && output_format == input_format {
            log::trace!(
                "{} input of {} bytes already within target {}",
                input_format,
                input.len(),
                request.target_size
            );
            return Ok(CompressionResult::original(input, input_format));
        }

        let image = self.codec.decode(input, input_format)?;
        self.run(&image, output_format, request)
    }

    /// Like [`Compressor::compress`], with the input format given as a MIME
    /// type. An unsupported type is rejected before anything else.
    pub fn compress_mime<'a>(
        &self,
        input: &'a [u8],
        input_type: &str,
        request: &CompressionRequest,
    ) -> Result<CompressionResult<'a>, CompressError> {
        let input_format = ImageFormat::from_mime(input_type)?;
        self.compress(input, input_format, request)
    }

    /// Search on an already decoded image. There is no fast path: the
    /// output is always a fresh encoding in the resolved format.
    pub fn compress_image(
        &self,
        image: &DecodedImage,
        source_format: ImageFormat,
        request: &CompressionRequest,
    ) -> Result<CompressionResult<'static>, CompressError> {
        request.validate()?;
        self.run(image, request.resolve_output(source_format), request)
    }

    fn run(
        &self,
        image: &DecodedImage,
        format: ImageFormat,
        request: &CompressionRequest,
    ) -> Result<CompressionResult<'static>, CompressError> {
        let window = AcceptanceWindow::for_request(request.target_size, request.tolerance);
        let SearchOutcome {
            candidate,
            outcome,
            iterations,
        } = search(&self.codec, image, format, &window, &self.config)?;

        log::info!(
            "compressed {}x{} to {} bytes as {} ({}, {} iterations, target {})",
            image.width,
            image.height,
            candidate.size,
            format,
            outcome.as_str(),
            iterations,
            request.target_size
        );

        Ok(CompressionResult {
            size: candidate.size,
            bytes: Cow::Owned(candidate.bytes),
            format: candidate.format,
            outcome,
            iterations,
        })
    }
}

/// Compress with the default codec and configuration.
pub fn compress<'a>(
    input: &'a [u8],
    input_format: ImageFormat,
    request: &CompressionRequest,
) -> Result<CompressionResult<'a>, CompressError> {
    Compressor::<ImageCodec>::default().compress(input, input_format, request)
}

/// Compress with the default codec, taking the input format as a MIME type.
pub fn compress_mime<'a>(
    input: &'a [u8],
    input_type: &str,
    request: &CompressionRequest,
) -> Result<CompressionResult<'a>, CompressError> {
    Compressor::<ImageCodec>::default().compress_mime(input, input_type, request)
}
