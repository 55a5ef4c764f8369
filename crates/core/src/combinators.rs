//! Coercing combinators
//!
//! Free-function forms of the curve operators. Each operand goes through
//! [`wrap`] first, so numbers, pairs and functions can be mixed freely with
//! curves:
//!
//! ```rust
//! use pic_core::combinators::{scale, translate};
//! use pic_core::Curve;
//!
//! // A circle of radius 0.5 centred on (1, 1)
//! let c = translate(scale(Curve::circle(), 0.5)?, (1.0, 1.0))?;
//! assert_eq!(c.evaluate(0.0).y, 1.5);
//! # Ok::<(), pic_core::CurveError>(())
//! ```

use crate::curve::Curve;
use crate::error::CurveError;
use crate::operand::{Operand, wrap};

pub fn translate(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Curve, CurveError> {
    Ok(wrap(a)?.translate(wrap(b)?))
}

pub fn scale(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Curve, CurveError> {
    Ok(wrap(a)?.scale(wrap(b)?))
}

pub fn rotate(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Curve, CurveError> {
    Ok(wrap(a)?.rotate(wrap(b)?))
}

pub fn concat(a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Curve, CurveError> {
    Ok(wrap(a)?.concat(wrap(b)?))
}

pub fn repeat(curve: impl Into<Operand>, times: f64) -> Result<Curve, CurveError> {
    Ok(wrap(curve)?.repeat(times))
}

pub fn step(curve: impl Into<Operand>, steps: f64) -> Result<Curve, CurveError> {
    Ok(wrap(curve)?.step(steps))
}

pub fn reverse(curve: impl Into<Operand>) -> Result<Curve, CurveError> {
    Ok(wrap(curve)?.reverse())
}

pub fn boustro(curve: impl Into<Operand>, times: f64) -> Result<Curve, CurveError> {
    Ok(wrap(curve)?.boustro(times))
}
