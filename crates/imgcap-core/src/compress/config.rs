//! Tuning constants for the size search.

use serde::{Deserialize, Serialize};

/// Default relative interval width at which the search stops.
pub const DEFAULT_PRECISION: f64 = 0.01;

/// Default hard cap on encode attempts per run.
pub const DEFAULT_MAX_ITERATIONS: u32 = 32;

/// Search loop configuration.
///
/// Neither value affects correctness, only how many candidates a run may
/// encode before settling on its best one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop once `(high - low) / high` drops below this.
    pub precision: f64,
    /// Stop after this many encodes even if the interval is still wide.
    pub max_iterations: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SearchConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Iteration cap with a floor of one, so every run encodes at least once.
    pub fn iteration_limit(&self) -> u32 {
        self.max_iterations.max(1)
    }

    /// Precision used by the search: `precision` when it is finite and in
    /// `(0, 1)`, otherwise [`DEFAULT_PRECISION`].
    pub fn effective_precision(&self) -> f64 {
        if self.precision.is_finite() && self.precision > 0.0 && self.precision < 1.0 {
            self.precision
        } else {
            DEFAULT_PRECISION
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::new();
        assert_eq!(config.precision, 0.01);
        assert_eq!(config.max_iterations, 32);
    }

    #[test]
    fn test_iteration_limit_floor() {
        let mut config = SearchConfig::default();
        config.max_iterations = 0;
        assert_eq!(config.iteration_limit(), 1);
    }

    #[test]
    fn test_effective_precision_falls_back_on_unusable_values() {
        for precision in [0.0, -0.5, 1.0, 3.0, f64::NAN, f64::INFINITY] {
            let config = SearchConfig {
                precision,
                max_iterations: 32,
            };
            assert_eq!(config.effective_precision(), DEFAULT_PRECISION, "{}", precision);
        }

        let config = SearchConfig {
            precision: 0.001,
            max_iterations: 32,
        };
        assert_eq!(config.effective_precision(), 0.001);
    }
}
