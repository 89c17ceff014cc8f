//! Flattening curves into polylines.

use pathframe_math::Point3;

use crate::curve::ParametricCurve;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Convert a curve to a polyline using adaptive subdivision.
///
/// A span is subdivided while its parameter-midpoint point deviates from the chord
/// midpoint by more than `tolerance`, the same flatness test used by adaptive arc
/// length. The first and last points are the curve endpoints.
pub fn curve_to_polyline(curve: &dyn ParametricCurve, tolerance: f64) -> Vec<Point3> {
    let start = curve.evaluate(0.0);
    let end = curve.evaluate(1.0);
    let mut points = vec![start];
    subdivide_curve(curve, (start, 0.0), (end, 1.0), tolerance, &mut points, 0);
    points
}

fn subdivide_curve(
    curve: &dyn ParametricCurve,
    (p0, t0): (Point3, f64),
    (p1, t1): (Point3, f64),
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    if depth >= MAX_DEPTH {
        points.push(p1);
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p_mid = curve.evaluate(t_mid);
    let deviation = (p_mid - (p0 + p1) * 0.5).length();

    if deviation > tolerance {
        subdivide_curve(curve, (p0, t0), (p_mid, t_mid), tolerance, points, depth + 1);
        subdivide_curve(curve, (p_mid, t_mid), (p1, t1), tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{BezierCurve, HermiteCurve};
    use crate::length;
    use pathframe_math::DVec3;

    #[test]
    fn test_straight_bezier_is_one_segment() {
        let line =
            BezierCurve::with_points(1, vec![DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0)]).unwrap();
        let points = curve_to_polyline(&line, 0.01);
        assert_eq!(points.len(), 2);
        assert!((points[0] - DVec3::ZERO).length() < 1e-10);
        assert!((points[1] - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_arch_points_lie_on_curve() {
        let arch = HermiteCurve::new(
            DVec3::ZERO,
            DVec3::new(5.0, 0.0, 0.0),
            DVec3::new(0.0, 5.0, 0.0),
            DVec3::new(0.0, -5.0, 0.0),
        );
        let points = curve_to_polyline(&arch, 0.001);
        assert!(points.len() > 10, "arch should subdivide, got {} points", points.len());
        assert!((points[points.len() - 1] - arch.p2).length() < 1e-12);

        // A finer subdivision of the same spans can only be longer.
        let polyline: f64 = points.windows(2).map(|w| (w[1] - w[0]).length()).sum();
        let arc = length::adaptive(&arch, 1e-7, 32);
        assert!(polyline <= arc + 1e-6);
        assert!((arc - polyline) / arc < 1e-3, "polyline {} vs arc {}", polyline, arc);
    }
}
