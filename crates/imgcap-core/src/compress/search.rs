//! Bisection over the unified scale/quality parameter.
//!
//! Each step encodes at the interval midpoint `t`, using `t` both as the
//! linear dimension scale and as encoder quality. A candidate larger than the
//! target sends the search to the lower half, anything else to the upper
//! half.

use super::{AcceptanceWindow, Outcome, SearchConfig};
use crate::codec::Encoder;
use crate::decode::DecodedImage;
use crate::encode::{Candidate, EncodeError};
use crate::ImageFormat;

/// Open interval `(low, high)` within `[0, 1]` holding the next parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchInterval {
    pub low: f64,
    pub high: f64,
}

impl Default for SearchInterval {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }
}

impl SearchInterval {
    pub fn mid(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Relative width `(high - low) / high`.
    pub fn relative_width(&self) -> f64 {
        (self.high - self.low) / self.high
    }

    pub fn has_converged(&self, precision: f64) -> bool {
        self.relative_width() < precision
    }

    /// Whether floating point can no longer place a midpoint strictly
    /// between `low` and `high`.
    pub fn is_exhausted(&self) -> bool {
        let mid = self.mid();
        !(self.low < mid && mid < self.high)
    }

    /// Keep `(low, mid)`: the candidate at `mid` was too large.
    pub fn lower_half(self) -> Self {
        Self {
            low: self.low,
            high: self.mid(),
        }
    }

    /// Keep `(mid, high)`: the candidate at `mid` was small enough.
    pub fn upper_half(self) -> Self {
        Self {
            low: self.mid(),
            high: self.high,
        }
    }
}

/// Result of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub candidate: Candidate,
    pub outcome: Outcome,
    pub iterations: u32,
}

/// Run the bisection against `encoder` until a candidate lands in `window`,
/// the interval converges, or the iteration cap is hit.
///
/// Encoder errors abort the search immediately.
pub fn search<E: Encoder + ?Sized>(
    encoder: &E,
    image: &DecodedImage,
    format: ImageFormat,
    window: &AcceptanceWindow,
    config: &SearchConfig,
) -> Result<SearchOutcome, EncodeError> {
    let limit = config.iteration_limit();
    let precision = config.effective_precision();
    let mut interval = SearchInterval::default();
    let mut best: Option<Candidate> = None;
    let mut iterations = 0;

    loop {
        iterations += 1;
        let t = interval.mid();
        let candidate = encoder.encode(image, t, t, format)?;
        let size = candidate.size;

        log::debug!(
            "iteration {}: t={:.4} {}x{} -> {} bytes (window {}..={})",
            iterations,
            t,
            candidate.dimensions.0,
            candidate.dimensions.1,
            size,
            window.lower,
            window.upper
        );

        if window.contains(size) {
            return Ok(SearchOutcome {
                candidate,
                outcome: Outcome::Accepted,
                iterations,
            });
        }

        let best_now = match best {
            Some(prev) if !window.improves_on(&candidate, &prev) => prev,
            _ => candidate,
        };

        let next = if size > window.target {
            interval.lower_half()
        } else {
            interval.upper_half()
        };

        if interval.has_converged(precision) || iterations >= limit || next.is_exhausted() {
            log::debug!(
                "search stopped after {} iterations, best {} bytes",
                iterations,
                best_now.size
            );
            return Ok(SearchOutcome {
                candidate: best_now,
                outcome: Outcome::BestEffort,
                iterations,
            });
        }
        best = Some(best_now);
        interval = next;
    }
}
