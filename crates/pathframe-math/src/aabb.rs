use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned box enclosing a set of curve points or control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(Self::new(*first, *first), |b, &p| b.including(p)))
    }

    /// Grow the box just enough to contain `p`.
    pub fn including(self, p: Point3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Containment test with slack `eps` on every face.
    pub fn contains_point(&self, p: Point3, eps: f64) -> bool {
        let margin = Vector3::splat(eps);
        p.cmpge(self.min - margin).all() && p.cmple(self.max + margin).all()
    }
}
