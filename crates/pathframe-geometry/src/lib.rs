//! pathframe geometry: parametric curves, moving frames, and arc length.

pub mod batch;
pub mod curve;
pub mod frame;
pub mod length;
pub mod spline;
pub mod tessellate;

pub use curve::{BezierCurve, HermiteCurve, ParametricCurve};
pub use frame::{Frame, RmfPropagator};
pub use spline::{HermiteSpline, Spline};
