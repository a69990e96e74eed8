//! Acceptance window around the target size.
//!
//! A run accepts a candidate when its size lies in `[lower, upper]`. The
//! bounds come from the caller's signed tolerance, or from the dynamic
//! tolerance when none is given. Either way there is a single test.

use crate::encode::Candidate;

/// Floor of the dynamic tolerance (1 KiB).
pub const DYNAMIC_TOLERANCE_MIN: u64 = 1024;

/// Ceiling of the dynamic tolerance (1 MiB).
pub const DYNAMIC_TOLERANCE_MAX: u64 = 1024 * 1024;

/// Default window half-width for `target` bytes: 1 % of the target, at least
/// 1 KiB and at most 1 MiB.
///
/// Sizes are whole bytes, so flooring the 1 % term does not change which
/// sizes are accepted.
pub fn dynamic_tolerance(target: u64) -> u64 {
    (target / 100).clamp(DYNAMIC_TOLERANCE_MIN, DYNAMIC_TOLERANCE_MAX)
}

/// Inclusive size bounds a candidate must fall into to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptanceWindow {
    pub target: u64,
    pub lower: u64,
    pub upper: u64,
}

impl AcceptanceWindow {
    /// Window from an explicit signed tolerance.
    ///
    /// Negative tolerances only open the window below the target, positive
    /// ones only above it.
    pub fn from_tolerance(target: u64, tolerance: i64) -> Self {
        let (lower, upper) = if tolerance < 0 {
            (target.saturating_sub(tolerance.unsigned_abs()), target)
        } else {
            (target, target.saturating_add(tolerance.unsigned_abs()))
        };
        Self {
            target,
            lower,
            upper,
        }
    }

    /// Symmetric window of the dynamic tolerance.
    pub fn dynamic(target: u64) -> Self {
        let tolerance = dynamic_tolerance(target);
        Self {
            target,
            lower: target.saturating_sub(tolerance),
            upper: target.saturating_add(tolerance),
        }
    }

    /// Window for an optional caller tolerance.
    pub fn for_request(target: u64, tolerance: Option<i64>) -> Self {
        match tolerance {
            Some(tolerance) => Self::from_tolerance(target, tolerance),
            None => Self::dynamic(target),
        }
    }

    pub fn contains(&self, size: u64) -> bool {
        (self.lower..=self.upper).contains(&size)
    }

    /// Whether `size` is above the window's upper bound.
    pub fn overshoots(&self, size: u64) -> bool {
        size > self.upper
    }

    /// Whether `candidate` should replace `best` as the fallback result.
    ///
    /// Candidates within the upper bound outrank those above it; within the
    /// same class the one closer to the target wins. Ties keep `best`.
    ///
    /// Overshooting is ranked ahead of distance so a best-effort result never
    /// exceeds `upper` once any candidate at or below it has been seen.
    pub fn improves_on(&self, candidate: &Candidate, best: &Candidate) -> bool {
        let rank = |c: &Candidate| (self.overshoots(c.size), c.distance_to(self.target));
        rank(candidate) < rank(best)
    }
}
