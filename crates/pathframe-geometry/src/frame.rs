//! Moving frames along a curve: Frenet frames and rotation-minimizing frames.

use pathframe_core::{CurveSettings, Tolerance};
use pathframe_math::{
    clamp_parameter, normalize_or_unchanged, reflect_across, rotate_about_axis, Point3, Transform,
    Vector3,
};
use serde::{Deserialize, Serialize};

use crate::curve::ParametricCurve;

/// An oriented coordinate system attached to a curve point.
///
/// Frames built by this crate have a unit `tangent`, a `rotation_axis`
/// perpendicular to it, and `normal = rotation_axis × tangent`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point3,
    pub tangent: Vector3,
    pub normal: Vector3,
    pub rotation_axis: Vector3,
}

impl Frame {
    pub fn new(origin: Point3, tangent: Vector3, normal: Vector3, rotation_axis: Vector3) -> Self {
        Self {
            origin,
            tangent,
            normal,
            rotation_axis,
        }
    }

    /// Frenet frame of `curve` at `t`, derived from the tangent and acceleration there.
    ///
    /// Where the acceleration is zero or parallel to the tangent the rotation axis and
    /// normal come out as zero vectors.
    pub fn frenet<C: ParametricCurve + ?Sized>(curve: &C, t: f64) -> Self {
        let t = clamp_parameter(t);
        let origin = curve.evaluate(t);
        let tangent = normalize_or_unchanged(curve.tangent_at(t));
        let acceleration = curve.acceleration_at(t);
        let rotation_axis = normalize_or_unchanged((tangent + acceleration).cross(tangent));
        let normal = normalize_or_unchanged(rotation_axis.cross(tangent));

        Self {
            origin,
            tangent,
            normal,
            rotation_axis,
        }
    }

    /// One double-reflection step: carry this frame to a new sample point with unit
    /// tangent `tangent`.
    ///
    /// The rotation axis is reflected through the plane bisecting the two origins, then
    /// through the plane bisecting the reflected tangent and `tangent`. Coincident
    /// origins, or a reflected tangent equal to `tangent`, divide by zero.
    pub fn double_reflect(&self, origin: Point3, tangent: Vector3) -> Self {
        let displacement = origin - self.origin;
        let axis_reflected = reflect_across(self.rotation_axis, displacement);
        let tangent_reflected = reflect_across(self.tangent, displacement);

        let rotation_axis = reflect_across(axis_reflected, tangent - tangent_reflected);

        Self {
            origin,
            tangent,
            normal: rotation_axis.cross(tangent),
            rotation_axis,
        }
    }

    /// Rotate the normal and rotation axis by `angle` radians about the tangent.
    pub fn rolled(&self, angle: f64) -> Self {
        Self {
            normal: rotate_about_axis(self.normal, self.tangent, angle),
            rotation_axis: rotate_about_axis(self.rotation_axis, self.tangent, angle),
            ..*self
        }
    }

    /// Rigid transform mapping frame-local coordinates to world space.
    ///
    /// Local X is the normal, local Y the rotation axis and local Z the tangent,
    /// which is right-handed for frames built by this crate.
    pub fn to_transform(&self) -> Transform {
        Transform::from_axes(self.normal, self.rotation_axis, self.tangent, self.origin)
    }

    pub fn is_orthonormal(&self, tol: Tolerance) -> bool {
        tol.is_unit(self.tangent.length())
            && tol.is_unit(self.normal.length())
            && tol.is_unit(self.rotation_axis.length())
            && tol.is_perpendicular(self.tangent.dot(self.normal))
            && tol.is_perpendicular(self.tangent.dot(self.rotation_axis))
            && tol.is_perpendicular(self.normal.dot(self.rotation_axis))
    }
}

/// Walks a curve from `t = 0` to a target parameter in equal increments, carrying a
/// rotation-minimizing frame forward by double reflection.
///
/// The starting frame is the Frenet frame at `t = 0`. Each call to `next` yields the
/// frame at the next sample; the last frame is the one at the target parameter.
/// Propagation is inherently sequential: every frame depends on the one before it.
pub struct RmfPropagator<'a, C: ?Sized> {
    curve: &'a C,
    current: Frame,
    t_end: f64,
    step: usize,
    steps: usize,
}

impl<'a, C: ParametricCurve + ?Sized> RmfPropagator<'a, C> {
    pub fn new(curve: &'a C, t_end: f64, steps: usize) -> Self {
        let t_end = clamp_parameter(t_end);
        // Nothing to walk when the target is the start point.
        let steps = if t_end == 0.0 { 0 } else { steps };
        log::trace!("propagating rotation-minimizing frame to t={t_end} in {steps} steps");

        Self {
            curve,
            current: Frame::frenet(curve, 0.0),
            t_end,
            step: 0,
            steps,
        }
    }

    /// The frame the propagator currently holds (the Frenet frame at 0 before any step).
    pub fn current(&self) -> Frame {
        self.current
    }

    /// Parameter of the sample the next step moves to, if any steps remain.
    pub fn next_parameter(&self) -> Option<f64> {
        (self.step < self.steps).then(|| self.t_end * (self.step + 1) as f64 / self.steps as f64)
    }
}

impl<C: ParametricCurve + ?Sized> Iterator for RmfPropagator<'_, C> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let t = self.next_parameter()?;
        let origin = self.curve.evaluate(t);
        let tangent = normalize_or_unchanged(self.curve.tangent_at(t));

        self.current = self.current.double_reflect(origin, tangent);
        self.step += 1;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.step;
        (remaining, Some(remaining))
    }
}

impl<C: ParametricCurve + ?Sized> ExactSizeIterator for RmfPropagator<'_, C> {}

/// Rotation-minimizing frame of `curve` at `t`, reached in `steps` double-reflection steps.
///
/// `t = 0` (after clamping) or `steps = 0` returns the Frenet frame at 0.
pub fn rotation_minimizing_frame<C: ParametricCurve + ?Sized>(
    curve: &C,
    t: f64,
    steps: usize,
) -> Frame {
    let propagator = RmfPropagator::new(curve, t, steps);
    let start = propagator.current();
    propagator.fold(start, |_, frame| frame)
}

/// [`rotation_minimizing_frame`] with the step count taken from `settings`.
pub fn rmf_with_settings<C: ParametricCurve + ?Sized>(
    curve: &C,
    t: f64,
    settings: &CurveSettings,
) -> Frame {
    rotation_minimizing_frame(curve, t, settings.rmf_steps)
}
