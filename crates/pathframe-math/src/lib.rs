pub mod aabb;
pub mod transform;
pub mod vector;

pub use glam::{DMat3, DMat4, DQuat, DVec3};
pub use aabb::Aabb3;
pub use transform::Transform;
pub use vector::{clamp_parameter, lerp, normalize_or_unchanged, reflect_across, rotate_about_axis};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
