//! Multi-segment curves.

use pathframe_core::traits::Validate;
use pathframe_core::{PathframeError, Result};
use pathframe_math::{clamp_parameter, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::curve::{HermiteCurve, ParametricCurve};

/// A curve assembled from consecutive segments sharing endpoints.
///
/// The global parameter `[0, 1]` is divided evenly among the segments. Frames and
/// lengths come from the [`ParametricCurve`] defaults, so they see the spline as one
/// continuous curve.
pub trait Spline: ParametricCurve {
    /// Number of segments.
    fn segments(&self) -> usize;

    /// Segment index containing `t` and the local parameter inside that segment.
    ///
    /// `t = 1` maps to the end of the last segment rather than the start of a
    /// nonexistent one.
    fn segment_at(&self, t: f64) -> (usize, f64) {
        let n = self.segments();
        let scaled = clamp_parameter(t) * n as f64;
        let index = (scaled.floor() as usize).min(n.saturating_sub(1));
        (index, scaled - index as f64)
    }
}

/// Piecewise cubic Hermite spline through a sequence of knots.
///
/// `tangents[i]` is the derivative at `knots[i]` with respect to the local segment
/// parameter; global derivatives are scaled by the segment count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHermiteSpline")]
pub struct HermiteSpline {
    knots: Vec<Point3>,
    tangents: Vec<Vector3>,
}

#[derive(Deserialize)]
struct RawHermiteSpline {
    knots: Vec<Point3>,
    tangents: Vec<Vector3>,
}

impl TryFrom<RawHermiteSpline> for HermiteSpline {
    type Error = PathframeError;

    fn try_from(raw: RawHermiteSpline) -> Result<Self> {
        Self::new(raw.knots, raw.tangents)
    }
}

impl HermiteSpline {
    pub fn new(knots: Vec<Point3>, tangents: Vec<Vector3>) -> Result<Self> {
        let spline = Self { knots, tangents };
        spline.validate()?;
        Ok(spline)
    }

    /// Catmull-Rom spline: tangents from central differences of the neighbouring knots,
    /// one-sided at the two ends.
    pub fn catmull_rom(knots: Vec<Point3>) -> Result<Self> {
        if knots.len() < 2 {
            return Err(PathframeError::InvalidArgument(format!(
                "a spline needs at least 2 knots, got {}",
                knots.len()
            )));
        }
        let last = knots.len() - 1;
        let tangents = (0..=last)
            .map(|i| match i {
                0 => knots[1] - knots[0],
                i if i == last => knots[last] - knots[last - 1],
                i => (knots[i + 1] - knots[i - 1]) * 0.5,
            })
            .collect();
        Self::new(knots, tangents)
    }

    pub fn knots(&self) -> &[Point3] {
        &self.knots
    }

    pub fn tangents(&self) -> &[Vector3] {
        &self.tangents
    }

    /// The `index`-th segment as a standalone Hermite curve, if it exists.
    pub fn segment(&self, index: usize) -> Option<HermiteCurve> {
        (index < self.segments()).then(|| self.segment_unchecked(index))
    }

    fn segment_unchecked(&self, index: usize) -> HermiteCurve {
        HermiteCurve::new(
            self.knots[index],
            self.knots[index + 1],
            self.tangents[index],
            self.tangents[index + 1],
        )
    }

    /// Zero-length spline resting at `point`.
    fn stationary(point: Point3) -> Self {
        Self {
            knots: vec![point; 2],
            tangents: vec![Vector3::ZERO; 2],
        }
    }

    /// The piece running from knot `first` to knot `last`, inclusive.
    fn knot_range(&self, first: usize, last: usize) -> Self {
        Self {
            knots: self.knots[first..=last].to_vec(),
            tangents: self.tangents[first..=last].to_vec(),
        }
    }

    /// Segment index, segment curve and local parameter for the global parameter `t`.
    fn locate(&self, t: f64) -> (usize, HermiteCurve, f64) {
        let (index, local) = self.segment_at(t);
        (index, self.segment_unchecked(index), local)
    }
}

impl Validate for HermiteSpline {
    fn validate(&self) -> Result<()> {
        if self.knots.len() < 2 {
            return Err(PathframeError::InvalidArgument(format!(
                "a spline needs at least 2 knots, got {}",
                self.knots.len()
            )));
        }
        if self.knots.len() != self.tangents.len() {
            return Err(PathframeError::InvalidArgument(format!(
                "expected one tangent per knot ({} knots, {} tangents)",
                self.knots.len(),
                self.tangents.len()
            )));
        }
        Ok(())
    }
}

impl ParametricCurve for HermiteSpline {
    fn evaluate(&self, t: f64) -> Point3 {
        let (_, segment, local) = self.locate(t);
        segment.evaluate(local)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        let (_, segment, local) = self.locate(t);
        segment.tangent_at(local) * self.segments() as f64
    }

    fn acceleration_at(&self, t: f64) -> Vector3 {
        let (_, segment, local) = self.locate(t);
        let n = self.segments() as f64;
        segment.acceleration_at(local) * (n * n)
    }

    /// Split at the global parameter `t`. The containing segment is split the way
    /// [`HermiteCurve::split`] does it; each half spreads `[0, 1]` evenly over its own
    /// segments, so the halves are reparameterized rather than restricted.
    ///
    /// A split on an interior knot cuts there without inserting a new knot. Splitting
    /// at either end yields a stationary single-segment spline at that end.
    fn split(&self, t: f64) -> (Self, Self) {
        let (index, segment, local) = self.locate(t);
        let knot = match local {
            l if l == 0.0 => Some(index),
            l if l == 1.0 => Some(index + 1),
            _ => None,
        };
        if let Some(knot) = knot {
            let last = self.segments();
            return match knot {
                0 => (Self::stationary(self.knots[0]), self.clone()),
                k if k == last => (self.clone(), Self::stationary(self.knots[last])),
                k => (self.knot_range(0, k), self.knot_range(k, last)),
            };
        }

        let pt = segment.evaluate(local);
        let vt = segment.tangent_at(local);

        let mut first_knots = self.knots[..=index].to_vec();
        let mut first_tangents = self.tangents[..=index].to_vec();
        first_knots.push(pt);
        first_tangents.push(vt);

        let mut second_knots = vec![pt];
        let mut second_tangents = vec![vt];
        second_knots.extend_from_slice(&self.knots[index + 1..]);
        second_tangents.extend_from_slice(&self.tangents[index + 1..]);

        (
            Self {
                knots: first_knots,
                tangents: first_tangents,
            },
            Self {
                knots: second_knots,
                tangents: second_tangents,
            },
        )
    }
}

impl Spline for HermiteSpline {
    fn segments(&self) -> usize {
        self.knots.len() - 1
    }
}
