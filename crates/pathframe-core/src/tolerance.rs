/// Comparison tolerances for checking frames and curve samples.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance for lengths and distances (in model units)
    pub linear: f64,
    /// Tolerance on the cosine between two directions
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_ANGULAR: f64 = 1e-9;

    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    /// Tolerances suited to values that went through many propagation steps.
    pub fn loose() -> Self {
        Self {
            linear: 1e-6,
            angular: 1e-6,
        }
    }

    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    pub fn is_zero(self, v: f64) -> bool {
        v.abs() <= self.linear
    }

    /// Check that a vector length is one within linear tolerance
    pub fn is_unit(self, length: f64) -> bool {
        self.linear_eq(length, 1.0)
    }

    /// Check that two unit directions with the given dot product are perpendicular
    pub fn is_perpendicular(self, cos_angle: f64) -> bool {
        cos_angle.abs() <= self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LINEAR, Self::DEFAULT_ANGULAR)
    }
}
