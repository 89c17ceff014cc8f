//! Arc-length estimation.
//!
//! Two independent strategies are provided. [`gauss_legendre`] is the default behind
//! [`ParametricCurve::length`]: constant cost, exact whenever the speed `|C'(t)|` is
//! close to a polynomial of degree 9, but it can under- or over-estimate curves whose
//! speed varies sharply. [`adaptive`] keeps splitting until every piece is flat to
//! within a distance tolerance, which follows sharp bends at the price of a variable
//! (depth-capped) amount of work.

use pathframe_core::CurveSettings;
use pathframe_math::Point3;

use crate::curve::ParametricCurve;

/// `(weight, abscissa)` pairs of the 5-point Gauss-Legendre rule on `[-1, 1]`.
const GAUSS_LEGENDRE_5: [(f64, f64); 5] = [
    (0.568_888_888_888_888_9, 0.0),
    (0.478_628_670_499_366_5, -0.538_469_310_105_683_1),
    (0.478_628_670_499_366_5, 0.538_469_310_105_683_1),
    (0.236_926_885_056_189_1, -0.906_179_845_938_664_0),
    (0.236_926_885_056_189_1, 0.906_179_845_938_664_0),
];

/// Arc length over `[0, 1]` by 5-point Gauss-Legendre quadrature of `|tangent_at(u)|`.
///
/// Abscissae are mapped to `u = a/2 + 1/2`; the sum is scaled by the map's Jacobian `1/2`.
pub fn gauss_legendre<C: ParametricCurve + ?Sized>(curve: &C) -> f64 {
    const Z: f64 = 0.5;
    let sum: f64 = GAUSS_LEGENDRE_5
        .iter()
        .map(|&(weight, abscissa)| weight * curve.tangent_at(Z * abscissa + Z).length())
        .sum();
    Z * sum
}

/// Arc length over `[0, 1]` by adaptive subdivision.
///
/// A span is accepted as a straight chord once the curve point at its parameter midpoint
/// lies within `tolerance` of the chord midpoint; otherwise both halves are measured
/// recursively. Recursion stops at `max_depth` levels, where the chord is taken as is.
pub fn adaptive<C: ParametricCurve + ?Sized>(curve: &C, tolerance: f64, max_depth: u32) -> f64 {
    let start = (curve.evaluate(0.0), 0.0);
    let end = (curve.evaluate(1.0), 1.0);

    let mut stats = SubdivisionStats::default();
    let length = subdivide(curve, start, end, tolerance, max_depth, 0, &mut stats);

    if stats.capped > 0 {
        log::warn!(
            "adaptive arc length hit the depth cap of {max_depth} on {} spans \
             (tolerance {tolerance})",
            stats.capped
        );
    }
    log::debug!(
        "adaptive arc length {length} from {} chords (tolerance {tolerance})",
        stats.chords
    );
    length
}

/// [`adaptive`] with the tolerance and depth cap taken from `settings`.
pub fn adaptive_with_settings<C: ParametricCurve + ?Sized>(
    curve: &C,
    settings: &CurveSettings,
) -> f64 {
    adaptive(curve, settings.length_tolerance, settings.max_depth)
}

#[derive(Debug, Default)]
struct SubdivisionStats {
    chords: usize,
    capped: usize,
}

fn subdivide<C: ParametricCurve + ?Sized>(
    curve: &C,
    (p1, t1): (Point3, f64),
    (p2, t2): (Point3, f64),
    tolerance: f64,
    max_depth: u32,
    depth: u32,
    stats: &mut SubdivisionStats,
) -> f64 {
    let chord = (p1 - p2).length();
    if depth >= max_depth {
        stats.chords += 1;
        stats.capped += 1;
        return chord;
    }

    let tm = (t1 + t2) * 0.5;
    let mid = curve.evaluate(tm);
    let chord_mid = (p1 + p2) * 0.5;

    if (mid - chord_mid).length() > tolerance {
        subdivide(curve, (p1, t1), (mid, tm), tolerance, max_depth, depth + 1, stats)
            + subdivide(curve, (mid, tm), (p2, t2), tolerance, max_depth, depth + 1, stats)
    } else {
        stats.chords += 1;
        chord
    }
}
