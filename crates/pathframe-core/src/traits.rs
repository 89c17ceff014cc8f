use crate::error::Result;

/// Re-check the structural invariants of a value.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A region guaranteed to contain every point of the value.
///
/// Curves report the box around their control polygon, which may be larger than
/// the tight box around the curve itself.
pub trait BoundingBox {
    type Bounds;

    fn bounding_box(&self) -> Self::Bounds;
}
