//! Cubic Hermite curve.

use pathframe_math::{clamp_parameter, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::ParametricCurve;

/// A cubic curve from `p1` to `p2` leaving with tangent `v1` and arriving with tangent `v2`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HermiteCurve {
    pub p1: Point3,
    pub p2: Point3,
    pub v1: Vector3,
    pub v2: Vector3,
}

impl HermiteCurve {
    pub fn new(p1: Point3, p2: Point3, v1: Vector3, v2: Vector3) -> Self {
        Self { p1, p2, v1, v2 }
    }
}

impl ParametricCurve for HermiteCurve {
    fn evaluate(&self, t: f64) -> Point3 {
        let t = clamp_parameter(t);
        let t2 = t * t;
        let t3 = t2 * t;

        self.p1 * (2.0 * t3 - 3.0 * t2 + 1.0)
            + self.v1 * (t3 - 2.0 * t2 + t)
            + self.p2 * (-2.0 * t3 + 3.0 * t2)
            + self.v2 * (t3 - t2)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let t = clamp_parameter(t);
        let t2 = t * t;
        let h = 6.0 * (t2 - t);

        self.p1 * h + self.v1 * (3.0 * t2 - 4.0 * t + 1.0) - self.p2 * h
            + self.v2 * (3.0 * t2 - 2.0 * t)
    }

    fn acceleration_at(&self, t: f64) -> Vector3 {
        let t = clamp_parameter(t);
        let h = 6.0 * (2.0 * t - 1.0);

        self.p1 * h + self.v1 * (6.0 * t - 4.0) - self.p2 * h + self.v2 * (6.0 * t - 2.0)
    }

    /// Split at `t` into `(p1, pt, v1, vt)` and `(pt, p2, vt, v2)`, where `pt` and `vt`
    /// are the position and tangent at `t`. No iteration is needed: the split point and
    /// its tangent fully define both halves.
    fn split(&self, t: f64) -> (Self, Self) {
        let pt = self.evaluate(t);
        let vt = self.tangent_at(t);

        (Self::new(self.p1, pt, self.v1, vt), Self::new(pt, self.p2, vt, self.v2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pathframe_math::DVec3;

    fn arch() -> HermiteCurve {
        HermiteCurve::new(
            DVec3::ZERO,
            DVec3::new(5.0, 0.0, 0.0),
            DVec3::new(0.0, 5.0, 0.0),
            DVec3::new(0.0, -5.0, 0.0),
        )
    }

    fn expected_tangent(c: &HermiteCurve, t: f64) -> DVec3 {
        let tt = t * t;
        let h = 6.0 * (tt - t);
        c.p1 * h + c.v1 * (3.0 * tt - 4.0 * t + 1.0) - c.p2 * h + c.v2 * (3.0 * tt - 2.0 * t)
    }

    fn expected_acceleration(c: &HermiteCurve, t: f64) -> DVec3 {
        c.p1 * 6.0 * (2.0 * t - 1.0) + c.v1 * (6.0 * t - 4.0) - c.p2 * 6.0 * (2.0 * t - 1.0)
            + c.v2 * (6.0 * t - 2.0)
    }

    #[test]
    fn test_default_is_zero() {
        let c = HermiteCurve::default();
        assert_eq!(c.p1, DVec3::ZERO);
        assert_eq!(c.p2, DVec3::ZERO);
        assert_eq!(c.v1, DVec3::ZERO);
        assert_eq!(c.v2, DVec3::ZERO);
    }

    #[test]
    fn test_evaluate() {
        let c = arch();
        assert_eq!(c.evaluate(0.0), c.p1);
        assert_abs_diff_eq!(c.evaluate(0.5), DVec3::new(2.5, 1.25, 0.0), epsilon = 1e-12);
        assert_eq!(c.evaluate(1.0), c.p2);
    }

    #[test]
    fn test_endpoints_exact_for_arbitrary_input() {
        let c = HermiteCurve::new(
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(4.0, 5.0, 6.0),
            DVec3::new(7.0, 8.0, 9.0),
            DVec3::new(10.0, 11.0, 12.0),
        );
        assert_eq!(c.evaluate(0.0), c.p1);
        assert_eq!(c.evaluate(1.0), c.p2);
        assert_eq!(c.tangent_at(0.0), c.v1);
        assert_eq!(c.tangent_at(1.0), c.v2);
    }

    #[test]
    fn test_tangent() {
        let c = arch();
        assert_eq!(c.tangent_at(0.0), c.v1);
        assert_abs_diff_eq!(c.tangent_at(0.5), expected_tangent(&c, 0.5), epsilon = 1e-12);
        assert_eq!(c.tangent_at(1.0), c.v2);
        assert_eq!(c.tangent_at(-3.0), c.v1);
    }

    #[test]
    fn test_acceleration() {
        let c = arch();
        for &t in &[0.0, 0.5, 1.0] {
            assert_abs_diff_eq!(
                c.acceleration_at(t),
                expected_acceleration(&c, t),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_split_shares_point_and_tangent() {
        let c = arch();
        let (a, b) = c.split(0.25);
        assert_eq!(a.p1, c.p1);
        assert_eq!(a.v1, c.v1);
        assert_eq!(b.p2, c.p2);
        assert_eq!(b.v2, c.v2);
        assert_eq!(a.p2, b.p1);
        assert_eq!(a.v2, b.v1);
        assert_abs_diff_eq!(a.p2, c.evaluate(0.25), epsilon = 1e-12);
        assert_abs_diff_eq!(a.v2, c.tangent_at(0.25), epsilon = 1e-12);
    }

    #[test]
    fn test_length_of_straight_hermite() {
        // Tangents matching the chord give uniform speed.
        let d = DVec3::new(3.0, 4.0, 0.0);
        let c = HermiteCurve::new(DVec3::ZERO, d, d, d);
        assert_abs_diff_eq!(c.length(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.adaptive_length(1e-6), 5.0, epsilon = 1e-9);
    }
}
