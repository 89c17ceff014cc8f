//! Curve trait and polynomial curve implementations.

mod bezier;
mod hermite;

use pathframe_core::CurveSettings;
use pathframe_math::{Point3, Vector3};

use crate::frame::{self, Frame};
use crate::length;

pub use bezier::BezierCurve;
pub use hermite::HermiteCurve;

/// A parametric curve in 3D space over the parameter range `[0, 1]`.
///
/// Every query clamps `t` into `[0, 1]`; out-of-range parameters are never an error.
///
/// Frame construction is not guarded against degenerate input. On a straight
/// segment or at an inflection point the Frenet rotation axis collapses to the
/// zero vector, and a zero displacement between two rotation-minimizing steps
/// divides by zero. Both show up only in the returned [`Frame`] (zero or
/// non-finite components), so callers that can hit those cases must check.
pub trait ParametricCurve: Send + Sync {
    /// Evaluate the curve position at parameter `t`.
    fn evaluate(&self, t: f64) -> Point3;

    /// First derivative with respect to `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Second derivative with respect to `t`.
    fn acceleration_at(&self, t: f64) -> Vector3;

    /// Split the curve at `t` into the parts covering `[0, t]` and `[t, 1]`.
    fn split(&self, t: f64) -> (Self, Self)
    where
        Self: Sized;

    /// Normal of the rotation-minimizing frame at `t`, propagated with the default step count.
    fn normal_at(&self, t: f64) -> Vector3 {
        self.rmf(t, CurveSettings::DEFAULT_RMF_STEPS).normal
    }

    /// Frenet frame at `t`.
    fn frenet_frame(&self, t: f64) -> Frame {
        Frame::frenet(self, t)
    }

    /// Rotation-minimizing frame at `t`, propagated from `t = 0` in `steps` equal increments.
    fn rmf(&self, t: f64, steps: usize) -> Frame {
        frame::rotation_minimizing_frame(self, t, steps)
    }

    /// Arc length over `[0, 1]` by 5-point Gauss-Legendre quadrature.
    fn length(&self) -> f64 {
        length::gauss_legendre(self)
    }

    /// Arc length over `[0, 1]` by adaptive chord subdivision.
    fn adaptive_length(&self, tolerance: f64) -> f64 {
        length::adaptive(self, tolerance, CurveSettings::DEFAULT_MAX_DEPTH)
    }
}
