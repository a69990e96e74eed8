//! Caller-facing request and result types.

use std::borrow::Cow;

use super::ValidationError;
use crate::ImageFormat;

/// Smallest accepted target size, in bytes.
pub const MIN_TARGET_SIZE: u64 = 1024;

/// Smallest accepted tolerance magnitude, in bytes.
pub const MIN_TOLERANCE: u64 = 1024;

/// What the caller asks of one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionRequest {
    /// Desired output size in bytes.
    pub target_size: u64,
    /// Signed acceptance window around the target. `None` uses the dynamic
    /// tolerance.
    pub tolerance: Option<i64>,
    /// Output format. `None` keeps the input format.
    pub output_format: Option<ImageFormat>,
}

impl CompressionRequest {
    pub fn new(target_size: u64) -> Self {
        Self {
            target_size,
            tolerance: None,
            output_format: None,
        }
    }

    pub fn with_tolerance(mut self, tolerance: i64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn with_output_format(mut self, format: ImageFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Check the target and tolerance floors.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.target_size < MIN_TARGET_SIZE {
            return Err(ValidationError::TargetSizeTooSmall {
                target: self.target_size,
            });
        }

        if let Some(tolerance) = self.tolerance {
            if tolerance.unsigned_abs() < MIN_TOLERANCE {
                return Err(ValidationError::ToleranceTooSmall { tolerance });
            }
        }

        Ok(())
    }

    /// The output format for an input of `input_format`.
    pub fn resolve_output(&self, input_format: ImageFormat) -> ImageFormat {
        self.output_format.unwrap_or(input_format)
    }
}

/// How a run produced its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input was already small enough and in the right format.
    Original,
    /// A candidate landed inside the acceptance window.
    Accepted,
    /// The search stopped without a candidate in the window; the closest one
    /// seen is returned.
    BestEffort,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Original => "original",
            Outcome::Accepted => "accepted",
            Outcome::BestEffort => "bestEffort",
        }
    }
}

/// The bytes handed back to the caller.
///
/// On the fast path `bytes` borrows the caller's input unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult<'a> {
    pub bytes: Cow<'a, [u8]>,
    pub size: u64,
    pub format: ImageFormat,
    pub outcome: Outcome,
    /// Number of candidates encoded (zero on the fast path).
    pub iterations: u32,
}

impl<'a> CompressionResult<'a> {
    pub(crate) fn original(bytes: &'a [u8], format: ImageFormat) -> Self {
        Self {
            size: bytes.len() as u64,
            bytes: Cow::Borrowed(bytes),
            format,
            outcome: Outcome::Original,
            iterations: 0,
        }
    }

    /// Detach the result from the input's lifetime.
    pub fn into_owned(self) -> CompressionResult<'static> {
        CompressionResult {
            bytes: Cow::Owned(self.bytes.into_owned()),
            size: self.size,
            format: self.format,
            outcome: self.outcome,
            iterations: self.iterations,
        }
    }
}
