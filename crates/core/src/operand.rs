//! Coercion layer
//!
//! Combinators accept anything that can stand in for a curve: a curve, a
//! function, a number (the constant `(n, n)`) or a pair. [`Operand`] is the
//! tagged union of those shapes, plus the literal shapes a front end can
//! produce that are *not* acceptable, so that rejecting them is a typed
//! [`CurveError::InvalidOperand`] rather than a panic.

use crate::curve::{Curve, CurveFn, Point};
use crate::error::CurveError;
use std::fmt;
use std::sync::Arc;

const EXPECTED_CURVE: &str = "function, number, or 2-tuple";
const EXPECTED_SCALAR: &str = "number";

/// A value that may be coerced into a curve.
#[derive(Clone)]
pub enum Operand {
    Curve(Curve),
    Function(CurveFn),
    Number(f64),
    Pair(f64, f64),
    /// A parenthesized literal with other than two components
    Tuple(Vec<f64>),
}

impl Default for Operand {
    /// The zero-equivalent handed out by an exhausted stack
    fn default() -> Self {
        Operand::Number(0.0)
    }
}

impl Operand {
    /// Wrap an external function
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(f64) -> Point + Send + Sync + 'static,
    {
        Operand::Function(Arc::new(f))
    }

    /// Short description of the operand's shape, used in error messages
    pub fn shape(&self) -> String {
        match self {
            Operand::Curve(_) => "curve".to_string(),
            Operand::Function(_) => "function".to_string(),
            Operand::Number(_) => "number".to_string(),
            Operand::Pair(..) => "2-tuple".to_string(),
            Operand::Tuple(items) => format!("{}-tuple", items.len()),
        }
    }

    /// Coerce into a curve
    pub fn into_curve(self) -> Result<Curve, CurveError> {
        match self {
            Operand::Curve(c) => Ok(c),
            Operand::Function(f) => Ok(Curve::Function(f)),
            Operand::Number(n) => Ok(Curve::from(n)),
            Operand::Pair(x, y) => Ok(Curve::constant((x, y))),
            other @ Operand::Tuple(_) => Err(other.invalid(EXPECTED_CURVE)),
        }
    }

    /// Coerce into a numeric parameter (repeat count, step count)
    pub fn as_scalar(&self) -> Result<f64, CurveError> {
        match self {
            Operand::Number(n) => Ok(*n),
            other => Err(other.invalid(EXPECTED_SCALAR)),
        }
    }

    fn invalid(&self, expected: &'static str) -> CurveError {
        CurveError::InvalidOperand {
            value: self.to_string(),
            shape: self.shape(),
            expected,
        }
    }
}

/// Coerce any curve-like value into a [`Curve`].
///
/// Identity for curves; functions become function curves; a number `n`
/// becomes the constant `(n, n)`; a pair becomes a constant. Anything else
/// is an [`CurveError::InvalidOperand`].
pub fn wrap(value: impl Into<Operand>) -> Result<Curve, CurveError> {
    value.into().into_curve()
}

impl TryFrom<Operand> for Curve {
    type Error = CurveError;

    fn try_from(operand: Operand) -> Result<Self, Self::Error> {
        operand.into_curve()
    }
}

impl From<Curve> for Operand {
    fn from(c: Curve) -> Self {
        Operand::Curve(c)
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<(f64, f64)> for Operand {
    fn from((x, y): (f64, f64)) -> Self {
        Operand::Pair(x, y)
    }
}

impl From<Point> for Operand {
    fn from(p: Point) -> Self {
        Operand::Pair(p.x, p.y)
    }
}

impl From<Vec<f64>> for Operand {
    fn from(items: Vec<f64>) -> Self {
        match items.as_slice() {
            [x, y] => Operand::Pair(*x, *y),
            _ => Operand::Tuple(items),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Curve(c) => write!(f, "{}", c),
            Operand::Function(_) => write!(f, "<function>"),
            Operand::Number(n) => write!(f, "{}", n),
            Operand::Pair(x, y) => write!(f, "({}, {})", x, y),
            Operand::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Curve(c) => f.debug_tuple("Curve").field(c).finish(),
            Operand::Function(_) => write!(f, "Function(..)"),
            Operand::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Operand::Pair(x, y) => f.debug_tuple("Pair").field(x).field(y).finish(),
            Operand::Tuple(items) => f.debug_tuple("Tuple").field(items).finish(),
        }
    }
}
