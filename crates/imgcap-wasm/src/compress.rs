//! Compression WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { compress } from '@imgcap/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = compress(bytes, file.type, { targetSize: 200_000, outputType: 'image/webp' });
//! const blob = new Blob([result.bytes()], { type: result.type });
//! ```

use imgcap_core::{CompressError, Compressor, ImageCodec, ImageFormat};
use wasm_bindgen::prelude::*;

use crate::types::{CompressOptions, JsCompressionResult};

/// Compress `bytes` of MIME type `input_type` toward `options.targetSize`.
///
/// # Errors
///
/// Throws a string with the failure message: unsupported type, target or
/// tolerance below 1 KiB, undecodable input, or an encoder failure.
#[wasm_bindgen]
pub fn compress(
    bytes: &[u8],
    input_type: &str,
    options: JsValue,
) -> Result<JsCompressionResult, JsValue> {
    let options: CompressOptions =
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?;
    compress_with_options(bytes, input_type, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Input type first, then the options, then the run itself.
pub(crate) fn compress_with_options(
    bytes: &[u8],
    input_type: &str,
    options: &CompressOptions,
) -> Result<JsCompressionResult, CompressError> {
    let input_format = ImageFormat::from_mime(input_type)?;
    let request = options.to_request()?;

    let result = Compressor::<ImageCodec>::default().compress(bytes, input_format, &request)?;
    Ok(result.into())
}
