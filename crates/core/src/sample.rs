//! Uniform sampling
//!
//! No adaptive density: a curve with fast detail needs more points, and
//! consecutive samples are joined even across discontinuities.

use crate::curve::{Curve, Point};

/// Evaluate `curve` at `points` evenly spaced parameters over `[0, 1)`
pub fn interpolate(curve: &Curve, points: usize) -> Vec<Point> {
    (0..points)
        .map(|i| curve.evaluate(i as f64 / points as f64))
        .collect()
}
