//! imgcap Core - size-targeted image compression
//!
//! This crate re-encodes an image so that its encoded size lands near a
//! caller-chosen byte count. It decodes once, then bisects over a single
//! parameter that scales the output dimensions and the encoder quality
//! together until a candidate falls inside the acceptance window.
//!
//! ```no_run
//! use imgcap_core::{compress, CompressionRequest, ImageFormat};
//!
//! # fn main() -> Result<(), imgcap_core::CompressError> {
//! let input = std::fs::read("photo.jpg").unwrap_or_default();
//! let request = CompressionRequest::new(200 * 1024).with_output_format(ImageFormat::Webp);
//! let result = compress(&input, ImageFormat::Jpeg, &request)?;
//! println!("{} bytes as {}", result.size, result.format);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod compress;
pub mod decode;
pub mod encode;
pub mod format;

#[cfg(test)]
mod fixtures;

pub use codec::{Decoder, Encoder, ImageCodec};
pub use compress::{
    compress, compress_mime, CompressError, CompressionRequest, CompressionResult, Compressor,
    Outcome, SearchConfig, ValidationError,
};
pub use decode::{DecodeError, DecodedImage};
pub use encode::{Candidate, EncodeError, EncodeOptions};
pub use format::ImageFormat;

/// MIME types accepted as input and output, in display order.
pub fn supported_mime_types() -> Vec<&'static str> {
    ImageFormat::ALL.iter().map(|f| f.mime_type()).collect()
}
