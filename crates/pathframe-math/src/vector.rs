//! Vector operations used by the curve algorithms.
//!
//! These wrap glam with the exact numerical conventions the curve code relies on:
//! zero vectors survive normalization untouched, and reflections do not guard
//! against a zero plane normal.

use crate::{DQuat, Point3, Vector3};

/// Clamp a curve parameter into `[0, 1]`.
#[inline]
pub fn clamp_parameter(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Linear interpolation written as `a(1 - t) + bt`, so `t = 1` yields `b` exactly.
#[inline]
pub fn lerp(a: Point3, b: Point3, t: f64) -> Point3 {
    a * (1.0 - t) + b * t
}

/// Normalize `v`, leaving a zero-length vector as it is.
#[inline]
pub fn normalize_or_unchanged(v: Vector3) -> Vector3 {
    let len = v.length();
    if len == 0.0 {
        v
    } else {
        v / len
    }
}

/// Reflect `v` through the plane through the origin whose normal is `normal`.
///
/// `normal` need not be unit length. A zero `normal` divides by zero and yields
/// non-finite components.
#[inline]
pub fn reflect_across(v: Vector3, normal: Vector3) -> Vector3 {
    v - normal * (2.0 / normal.length_squared() * normal.dot(v))
}

/// Rotate `v` by `angle` radians about `axis` (right-handed).
pub fn rotate_about_axis(v: Vector3, axis: Vector3, angle: f64) -> Vector3 {
    DQuat::from_axis_angle(normalize_or_unchanged(axis), angle) * v
}
