//! Parallel evaluation of independent frame and length queries.
//!
//! Each rotation-minimizing frame is propagated sequentially, but frames at different
//! parameters (or on different curves) do not depend on each other, so they can be
//! computed on the rayon pool. Curves are only read here; nothing may mutate them
//! while a batch runs.

use rayon::prelude::*;

use crate::curve::ParametricCurve;
use crate::frame::Frame;

/// Frenet frames at each parameter in `ts`, in order.
pub fn frenet_frames_par<C: ParametricCurve + ?Sized>(curve: &C, ts: &[f64]) -> Vec<Frame> {
    ts.par_iter().map(|&t| curve.frenet_frame(t)).collect()
}

/// Rotation-minimizing frames at each parameter in `ts`, each propagated from `t = 0`
/// in `steps` steps.
pub fn rmf_frames_par<C: ParametricCurve + ?Sized>(
    curve: &C,
    ts: &[f64],
    steps: usize,
) -> Vec<Frame> {
    ts.par_iter().map(|&t| curve.rmf(t, steps)).collect()
}

/// Gauss-Legendre length of each curve, in order.
pub fn lengths_par<C: ParametricCurve>(curves: &[C]) -> Vec<f64> {
    curves.par_iter().map(|c| c.length()).collect()
}
