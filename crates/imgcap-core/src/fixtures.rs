//! Deterministic test images.
//!
//! Noise keeps encoders from collapsing the data, so encoded sizes grow with
//! pixel count the way photographs do.

use crate::decode::DecodedImage;
use crate::encode::{encode_jpeg, encode_png};

/// Opaque RGBA noise from a fixed xorshift seed.
pub fn noise_image(width: u32, height: u32) -> DecodedImage {
    let mut state: u32 = 0x9E37_79B9 ^ width.wrapping_mul(31).wrapping_add(height);
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);

    for _ in 0..(width as usize * height as usize) {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let [r, g, b, _] = state.to_le_bytes();
        pixels.extend_from_slice(&[r, g, b, 255]);
    }

    DecodedImage::new(width, height, pixels)
}

pub fn encoded_png(width: u32, height: u32) -> Vec<u8> {
    let image = noise_image(width, height);
    encode_png(&image.pixels, width, height, false).unwrap()
}

pub fn encoded_jpeg(width: u32, height: u32) -> Vec<u8> {
    let image = noise_image(width, height);
    encode_jpeg(&image.pixels, width, height, 90).unwrap()
}
