//! Tunable parameters for frame propagation and arc-length estimation.

use serde::{Deserialize, Serialize};

/// Cost/accuracy knobs shared by the curve algorithms.
///
/// Curves take these values as explicit arguments; `CurveSettings` only bundles
/// the defaults so callers can load and pass them around as one value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    /// Number of double-reflection steps used when propagating a rotation-minimizing frame.
    pub rmf_steps: usize,
    /// Maximum chord-midpoint deviation accepted by adaptive arc length.
    pub length_tolerance: f64,
    /// Recursion cap for adaptive subdivision.
    pub max_depth: u32,
}

impl CurveSettings {
    pub const DEFAULT_RMF_STEPS: usize = 100;
    pub const DEFAULT_LENGTH_TOLERANCE: f64 = 0.2;
    pub const DEFAULT_MAX_DEPTH: u32 = 32;

    pub fn with_rmf_steps(mut self, steps: usize) -> Self {
        self.rmf_steps = steps;
        self
    }

    pub fn with_length_tolerance(mut self, tolerance: f64) -> Self {
        self.length_tolerance = tolerance;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            rmf_steps: Self::DEFAULT_RMF_STEPS,
            length_tolerance: Self::DEFAULT_LENGTH_TOLERANCE,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
