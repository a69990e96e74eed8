//! Candidate encoding pipeline for imgcap.
//!
//! This module provides functionality for:
//! - Encoding RGBA pixels to JPEG, PNG, WebP and AVIF
//! - Producing a [`Candidate`] from a decoded image at a scale and quality
//!
//! Each format encoder takes RGBA input and converts as needed (JPEG drops
//! alpha; opaque images are written without an alpha plane).

mod avif;
mod candidate;
mod jpeg;
mod png;
mod types;
mod webp;

pub use avif::encode_avif;
pub use candidate::{encode_candidate, EncodeOptions};
pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{quality_percent, Candidate, EncodeError};
pub use webp::encode_webp;
