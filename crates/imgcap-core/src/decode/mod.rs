//! Image decoding pipeline for imgcap.
//!
//! This module provides functionality for:
//! - Decoding JPEG, PNG, WebP (and, with `avif-decode`, AVIF) to RGBA
//! - Applying EXIF orientation to JPEG sources
//! - Scaling decoded images by the search parameter
//!
//! Decoding happens once per compression run; the decoded image is then
//! resized for every candidate encoding.

mod reader;
mod resize;
mod types;

pub use reader::{decode_image, extract_orientation};
pub use resize::{resize, resize_by_scale, scaled_dimensions};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
