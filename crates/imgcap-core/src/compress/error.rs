//! Error taxonomy for a compression run.

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Bad caller input, reported before any decode or encode work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input or requested output type is not one of the four formats.
    #[error("Only PNG, JPEG, WebP and AVIF images are supported.")]
    UnsupportedFormat(String),

    /// The target size is below the 1 KiB floor.
    #[error("Target size must be at least 1KB (1024 bytes).")]
    TargetSizeTooSmall { target: u64 },

    /// A tolerance was given with magnitude below 1 KiB.
    #[error("Tolerance size must be at least ±1024 bytes.")]
    ToleranceTooSmall { tolerance: i64 },
}

/// Any failure of a compression run.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
