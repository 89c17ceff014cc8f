use approx::assert_abs_diff_eq;
use pathframe_core::{CurveSettings, Tolerance};
use pathframe_geometry::batch::{frenet_frames_par, rmf_frames_par};
use pathframe_geometry::tessellate::curve_to_polyline;
use pathframe_geometry::{BezierCurve, HermiteCurve, HermiteSpline, ParametricCurve, RmfPropagator};
use pathframe_math::{DVec3, Point3};

fn dvec3(x: f64, y: f64, z: f64) -> Point3 {
    DVec3::new(x, y, z)
}

fn bezier_of_degree(degree: usize) -> BezierCurve {
    let points = (0..=degree)
        .map(|i| {
            let s = i as f64;
            dvec3(s, (s * 1.3).sin() * 2.0, s * s * 0.25)
        })
        .collect();
    BezierCurve::with_points(degree, points).unwrap()
}

fn sample_params() -> Vec<f64> {
    (0..=10).map(|i| i as f64 / 10.0).collect()
}

#[test]
fn test_split_reproduces_curve_for_low_degrees() {
    let split_at = 0.35;
    for degree in 1..=4 {
        let curve = bezier_of_degree(degree);
        let (first, second) = curve.split(split_at);

        for u in sample_params() {
            assert_abs_diff_eq!(first.evaluate(u), curve.evaluate(split_at * u), epsilon = 1e-10);
            assert_abs_diff_eq!(
                second.evaluate(u),
                curve.evaluate(split_at + (1.0 - split_at) * u),
                epsilon = 1e-10
            );
        }
    }
}

#[test]
fn test_tangent_matches_finite_difference() {
    let h = 1e-6;
    for degree in 1..=4 {
        let curve = bezier_of_degree(degree);
        for &t in &[0.2, 0.5, 0.7] {
            let numeric = (curve.evaluate(t + h) - curve.evaluate(t - h)) / (2.0 * h);
            assert_abs_diff_eq!(curve.tangent_at(t), numeric, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_derivative_chain_degrees() {
    let mut current = Some(bezier_of_degree(4));
    let mut degrees = Vec::new();
    while let Some(curve) = current {
        degrees.push(curve.degree());
        current = curve.derivative();
    }
    assert_eq!(degrees, vec![4, 3, 2, 1, 0]);
}

#[test]
fn test_hermite_endpoints_and_split() {
    let c = HermiteCurve::new(
        dvec3(0.0, 0.0, 0.0),
        dvec3(5.0, 0.0, 0.0),
        dvec3(0.0, 5.0, 0.0),
        dvec3(0.0, -5.0, 0.0),
    );
    assert_eq!(c.evaluate(0.0), c.p1);
    assert_eq!(c.evaluate(1.0), c.p2);
    assert_abs_diff_eq!(c.evaluate(0.5), dvec3(2.5, 1.25, 0.0), epsilon = 1e-12);

    let (a, b) = c.split(0.5);
    assert_eq!(a.p2, b.p1);
    assert_abs_diff_eq!(a.p2, dvec3(2.5, 1.25, 0.0), epsilon = 1e-12);
}

#[test]
fn test_cubic_scenario() {
    let curve = BezierCurve::with_points(
        3,
        vec![
            dvec3(0.0, 0.0, 0.0),
            dvec3(0.0, 1.0, 0.0),
            dvec3(1.0, 0.0, 1.0),
            dvec3(0.0, 0.0, 1.0),
        ],
    )
    .unwrap();
    assert_abs_diff_eq!(curve.evaluate(0.5), dvec3(0.375, 0.375, 0.5), epsilon = 1e-12);
    assert_eq!(curve.tangent_at(0.0), dvec3(0.0, 3.0, 0.0));

    let frame = curve.frenet_frame(0.4);
    assert!(frame.is_orthonormal(Tolerance::loose()));
    assert!(curve.rmf(0.4, CurveSettings::DEFAULT_RMF_STEPS).is_orthonormal(Tolerance::loose()));
}

#[test]
fn test_single_step_rmf_keeps_target_tangent() {
    let curve = bezier_of_degree(3);
    for &t in &[0.3, 0.6, 1.0] {
        let frame = curve.rmf(t, 1);
        assert_abs_diff_eq!(frame.origin, curve.evaluate(t), epsilon = 1e-12);
        assert_abs_diff_eq!(frame.tangent, curve.frenet_frame(t).tangent, epsilon = 1e-12);
        assert!(frame.is_orthonormal(Tolerance::loose()));
    }
}

#[test]
fn test_propagator_ends_at_rmf() {
    let curve = bezier_of_degree(3);
    let frames: Vec<_> = RmfPropagator::new(&curve, 0.8, 16).collect();
    assert_eq!(frames.len(), 16);
    assert_eq!(frames[15], curve.rmf(0.8, 16));
}

#[test]
fn test_batch_matches_single_queries() {
    let spline = HermiteSpline::catmull_rom(vec![
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 2.0, 0.0),
        dvec3(3.0, 2.0, 1.0),
        dvec3(4.0, 0.0, 2.0),
    ])
    .unwrap();
    let ts = sample_params();

    let frenet = frenet_frames_par(&spline, &ts);
    let rmf = rmf_frames_par(&spline, &ts, 40);
    for (i, &t) in ts.iter().enumerate() {
        assert_eq!(frenet[i], spline.frenet_frame(t));
        assert_eq!(rmf[i], spline.rmf(t, 40));
    }
}

#[test]
fn test_polyline_length_tracks_arc_length() {
    let curve = bezier_of_degree(3);
    let points = curve_to_polyline(&curve, 1e-4);
    let polyline: f64 = points.windows(2).map(|w| (w[1] - w[0]).length()).sum();
    assert_abs_diff_eq!(polyline, curve.length(), epsilon = curve.length() * 1e-2);
}
