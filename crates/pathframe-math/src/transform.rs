use crate::{DMat3, DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Affine map from a local basis placed at `origin` into world space.
///
/// Built from a curve frame, `basis` holds the frame axes as columns, so a
/// local point `(x, y, z)` lands at `origin + x * col0 + y * col1 + z * col2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub basis: DMat3,
    pub origin: Point3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        basis: DMat3::IDENTITY,
        origin: Point3::ZERO,
    };

    pub fn from_axes(x_axis: Vector3, y_axis: Vector3, z_axis: Vector3, origin: Point3) -> Self {
        Self {
            basis: DMat3::from_cols(x_axis, y_axis, z_axis),
            origin,
        }
    }

    /// Homogeneous 4x4 form, for handing to renderers.
    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols(
            self.basis.x_axis.extend(0.0),
            self.basis.y_axis.extend(0.0),
            self.basis.z_axis.extend(0.0),
            self.origin.extend(1.0),
        )
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.origin + self.basis * p
    }

    /// Directions ignore the translation.
    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.basis * v
    }

    /// World-to-local map, or `None` when the axes are (nearly) coplanar.
    pub fn inverse(&self) -> Option<Transform> {
        if self.basis.determinant().abs() < 1e-15 {
            return None;
        }
        let basis = self.basis.inverse();
        Some(Self {
            basis,
            origin: -(basis * self.origin),
        })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
