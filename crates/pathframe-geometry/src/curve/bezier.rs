//! Bezier curves of arbitrary degree.

use std::ops::{Index, IndexMut};

use pathframe_core::traits::{BoundingBox, Validate};
use pathframe_core::{PathframeError, Result};
use pathframe_math::{clamp_parameter, lerp, Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::ParametricCurve;

/// A Bezier curve of degree `n` defined by `n + 1` control points.
///
/// The control-point count always equals `degree + 1`: constructors, [`set_points`]
/// and deserialization reject anything else. Degree 0 is a single stationary point.
///
/// [`set_points`]: BezierCurve::set_points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBezierCurve")]
pub struct BezierCurve {
    degree: usize,
    points: Vec<Point3>,
}

#[derive(Deserialize)]
struct RawBezierCurve {
    degree: usize,
    points: Vec<Point3>,
}

impl TryFrom<RawBezierCurve> for BezierCurve {
    type Error = PathframeError;

    fn try_from(raw: RawBezierCurve) -> Result<Self> {
        Self::with_points(raw.degree, raw.points)
    }
}

impl BezierCurve {
    /// A curve of the given degree with every control point at the origin.
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            points: vec![Point3::ZERO; degree + 1],
        }
    }

    pub fn with_points(degree: usize, points: Vec<Point3>) -> Result<Self> {
        let curve = Self { degree, points };
        curve.validate()?;
        Ok(curve)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Replace every control point at once. The degree is fixed; on a count
    /// mismatch the curve is left untouched.
    pub fn set_points(&mut self, points: Vec<Point3>) -> Result<()> {
        if points.len() != self.degree + 1 {
            return Err(PathframeError::control_point_count(self.degree, points.len()));
        }
        self.points = points;
        Ok(())
    }

    /// Point at `t` by repeated linear interpolation, O(n^2) but free of large
    /// intermediate powers and binomials.
    fn de_casteljau(&self, t: f64) -> Point3 {
        let mut row = self.points.clone();
        for len in (1..=self.degree).rev() {
            for i in 0..len {
                row[i] = lerp(row[i], row[i + 1], t);
            }
        }
        row[0]
    }

    /// The hodograph: a curve of degree `n - 1` with control points `n (P[i+1] - P[i])`.
    ///
    /// A degree-0 curve has no derivative curve.
    pub fn derivative(&self) -> Option<BezierCurve> {
        if self.degree == 0 {
            return None;
        }
        let n = self.degree as f64;
        Some(Self {
            degree: self.degree - 1,
            points: self.points.windows(2).map(|w| (w[1] - w[0]) * n).collect(),
        })
    }
}

/// Bernstein sum in one pass over `points` at parameter `s`: s^i grows by s,
/// (1-s)^(n-i) shrinks by 1/(1-s), and C(n, i) advances by (n - i) / (i + 1).
///
/// Returns `None` when the seed (1-s)^n is not a normal float, since every later
/// term is scaled from it, or when an overflowing binomial poisons the sum.
fn bernstein_sum<'a>(points: impl Iterator<Item = &'a Point3>, n: usize, s: f64) -> Option<Point3> {
    let mut pow_1_minus_s = (1.0 - s).powi(i32::try_from(n).ok()?);
    if !pow_1_minus_s.is_normal() {
        return None;
    }
    let k = 1.0 / (1.0 - s);
    let mut pow_s = 1.0;
    let mut binomial = 1.0;

    let mut result = Point3::ZERO;
    for (i, &p) in points.enumerate() {
        result += p * (binomial * pow_s * pow_1_minus_s);
        binomial = binomial * (n - i) as f64 / (i + 1) as f64;
        pow_s *= s;
        pow_1_minus_s *= k;
    }
    result.is_finite().then_some(result)
}

impl TryFrom<Vec<Point3>> for BezierCurve {
    type Error = PathframeError;

    /// Build a curve whose degree is one less than the number of points.
    fn try_from(points: Vec<Point3>) -> Result<Self> {
        match points.len() {
            0 => Err(PathframeError::InvalidArgument(
                "a Bezier curve needs at least one control point".into(),
            )),
            len => Ok(Self {
                degree: len - 1,
                points,
            }),
        }
    }
}

impl ParametricCurve for BezierCurve {
    fn evaluate(&self, t: f64) -> Point3 {
        let t = clamp_parameter(t);
        if t == 0.0 {
            return self.points[0];
        }
        if t == 1.0 {
            return self.points[self.degree];
        }

        // B(n, i)(t) == B(n, n - i)(1 - t), so the sum can run from whichever end
        // keeps the seed power (1 - s)^n furthest from underflow.
        if t <= 0.5 {
            bernstein_sum(self.points.iter(), self.degree, t)
                .unwrap_or_else(|| self.de_casteljau(t))
        } else {
            bernstein_sum(self.points.iter().rev(), self.degree, 1.0 - t)
                .unwrap_or_else(|| self.de_casteljau(t))
        }
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        if self.degree == 1 {
            return self.points[1] - self.points[0];
        }
        self.derivative().map_or(Vector3::ZERO, |d| d.evaluate(t))
    }

    fn acceleration_at(&self, t: f64) -> Vector3 {
        if self.degree <= 1 {
            return Vector3::ZERO;
        }
        self.derivative().map_or(Vector3::ZERO, |d| d.tangent_at(t))
    }

    /// De Casteljau subdivision.
    ///
    /// Row `k` of the table lerps adjacent entries of row `k - 1`. The first half takes
    /// the first entry of every row, the second half the last entry of every row, deepest
    /// row first.
    fn split(&self, t: f64) -> (Self, Self) {
        let t = clamp_parameter(t);
        let n = self.degree;

        let mut first = Vec::with_capacity(n + 1);
        let mut second = vec![Point3::ZERO; n + 1];
        let mut row = self.points.clone();

        for depth in 0..=n {
            first.push(row[0]);
            second[n - depth] = row[row.len() - 1];
            row = row.windows(2).map(|w| lerp(w[0], w[1], t)).collect();
        }

        (
            Self {
                degree: n,
                points: first,
            },
            Self {
                degree: n,
                points: second,
            },
        )
    }
}

impl Index<usize> for BezierCurve {
    type Output = Point3;

    fn index(&self, i: usize) -> &Point3 {
        &self.points[i]
    }
}

impl IndexMut<usize> for BezierCurve {
    fn index_mut(&mut self, i: usize) -> &mut Point3 {
        &mut self.points[i]
    }
}

impl Validate for BezierCurve {
    fn validate(&self) -> Result<()> {
        if self.points.len() != self.degree + 1 {
            return Err(PathframeError::control_point_count(self.degree, self.points.len()));
        }
        Ok(())
    }
}

impl BoundingBox for BezierCurve {
    type Bounds = Aabb3;

    /// Box around the control polygon, which contains the curve (convex hull property).
    fn bounding_box(&self) -> Aabb3 {
        // Never empty: a curve always holds degree + 1 >= 1 points.
        Aabb3::from_points(&self.points).unwrap_or(Aabb3::new(Point3::ZERO, Point3::ZERO))
    }
}
