//! WASM-compatible wrapper types for compression options and results.
//!
//! JavaScript hands numbers over as `f64`, so options are deserialized
//! loosely and then checked before they become a core
//! [`CompressionRequest`].

use imgcap_core::{CompressionRequest, CompressionResult, ImageFormat, ValidationError};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Options object accepted by `compress`.
///
/// ```typescript
/// { targetSize: 200_000, toleranceSize: -4096, outputType: "image/webp" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressOptions {
    /// A missing target reads as 0 and fails validation.
    #[serde(default)]
    pub target_size: f64,
    #[serde(default)]
    pub tolerance_size: Option<f64>,
    #[serde(default)]
    pub output_type: Option<String>,
}

impl CompressOptions {
    /// Convert to a core request.
    ///
    /// Non-finite, fractional, or negative targets report the target-size
    /// error; a tolerance that is not a whole number reports the tolerance
    /// error. An unknown `outputType` is an unsupported format.
    pub fn to_request(&self) -> Result<CompressionRequest, ValidationError> {
        let target_size = whole_number(self.target_size)
            .filter(|t| *t >= 0.0)
            .map(|t| t as u64)
            .ok_or(ValidationError::TargetSizeTooSmall { target: 0 })?;

        let mut request = CompressionRequest::new(target_size);

        if let Some(tolerance) = self.tolerance_size {
            let tolerance = whole_number(tolerance)
                .map(|t| t as i64)
                .ok_or(ValidationError::ToleranceTooSmall { tolerance: 0 })?;
            request = request.with_tolerance(tolerance);
        }

        if let Some(output_type) = &self.output_type {
            request = request.with_output_format(ImageFormat::from_mime(output_type)?);
        }

        Ok(request)
    }
}

fn whole_number(value: f64) -> Option<f64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value)
}

/// Result of a compression run for JavaScript.
///
/// `bytes()` copies the encoded data into a new `Uint8Array`.
#[wasm_bindgen]
pub struct JsCompressionResult {
    bytes: Vec<u8>,
    format: ImageFormat,
    outcome: &'static str,
    iterations: u32,
}

#[wasm_bindgen]
impl JsCompressionResult {
    /// Encoded size in bytes
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// MIME type of the encoded bytes
    #[wasm_bindgen(getter, js_name = type)]
    pub fn mime_type(&self) -> String {
        self.format.mime_type().to_string()
    }

    /// `"original"`, `"accepted"` or `"bestEffort"`
    #[wasm_bindgen(getter)]
    pub fn outcome(&self) -> String {
        self.outcome.to_string()
    }

    /// Number of candidate encodings tried
    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl From<CompressionResult<'_>> for JsCompressionResult {
    fn from(result: CompressionResult<'_>) -> Self {
        Self {
            bytes: result.bytes.into_owned(),
            format: result.format,
            outcome: result.outcome.as_str(),
            iterations: result.iterations,
        }
    }
}
