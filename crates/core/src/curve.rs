//! Curve algebra
//!
//! A curve maps a parameter `t` (nominally in `[0, 1]`) to a point in the
//! plane. Everything is built from three primitives (`circle`, `line` and
//! constants) plus external functions, combined into an owned expression
//! tree:
//!
//! ```text
//!            Binary(Rotate)
//!           /              \
//!   Unary(Repeat(30))     Unary(Step(30))
//!          |                   |
//!   Binary(Scale)            Circle
//!     /       \
//!  Circle     Line
//! ```
//!
//! ## Pointwise operators
//!
//! `translate`, `scale` and `rotate` evaluate both children at the same `t`
//! and combine the points. All three are commutative and associative, and
//! `scale` and `rotate` distribute over `translate`. `rotate` is complex
//! multiplication.
//!
//! ## Time operators
//!
//! `concat`, `repeat`, `step` and `reverse` reshape the flow of time and
//! never look at the points themselves. `concat` and `repeat` introduce
//! discontinuities where the child does not end where it begins; the algebra
//! does not check for that.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

/// A point in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Handle to an external curve function.
///
/// The callable is shared rather than owned so that curves stay `Clone`; it
/// is a leaf, never a tree node.
pub type CurveFn = Arc<dyn Fn(f64) -> Point + Send + Sync>;

/// Operators that combine two curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Pointwise addition
    Translate,
    /// Pointwise multiplication
    Scale,
    /// Complex multiplication
    Rotate,
    /// First child on `[0, 0.5)`, second on `[0.5, 1]`
    Concat,
}

impl BinaryOp {
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Translate => "translate",
            BinaryOp::Scale => "scale",
            BinaryOp::Rotate => "rotate",
            BinaryOp::Concat => "concat",
        }
    }
}

/// Operators that reshape the time of a single curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    /// Run the child `n` times; fractional `n` leaves a partial final cycle
    Repeat(f64),
    /// Hold the child's value between multiples of `1/n`
    Step(f64),
    /// Run the child backwards
    Reverse,
}

/// A parametric curve expression.
#[derive(Clone)]
pub enum Curve {
    /// `(sin 2πt, cos 2πt)`: one revolution starting and ending at (0, 1)
    Circle,
    /// `(t, t)`: from (0, 0) to (1, 1)
    Line,
    /// The same point for every `t`
    Constant(Point),
    /// An external function
    Function(CurveFn),
    Binary {
        op: BinaryOp,
        a: Box<Curve>,
        b: Box<Curve>,
    },
    Unary {
        op: UnaryOp,
        curve: Box<Curve>,
    },
}

// =============================================================================
// Construction
// =============================================================================

impl Curve {
    pub fn circle() -> Self {
        Curve::Circle
    }

    pub fn line() -> Self {
        Curve::Line
    }

    pub fn constant(value: impl Into<Point>) -> Self {
        Curve::Constant(value.into())
    }

    /// Wrap an external function as a curve
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(f64) -> Point + Send + Sync + 'static,
    {
        Curve::Function(Arc::new(f))
    }

    fn binary(op: BinaryOp, a: Curve, b: Curve) -> Self {
        Curve::Binary {
            op,
            a: Box::new(a),
            b: Box::new(b),
        }
    }

    fn unary(op: UnaryOp, curve: Curve) -> Self {
        Curve::Unary {
            op,
            curve: Box::new(curve),
        }
    }

    /// Add `other` pointwise
    pub fn translate(self, other: impl Into<Curve>) -> Self {
        Curve::binary(BinaryOp::Translate, self, other.into())
    }

    /// Multiply by `other` pointwise (nonuniform scaling)
    pub fn scale(self, other: impl Into<Curve>) -> Self {
        Curve::binary(BinaryOp::Scale, self, other.into())
    }

    /// Rotate and uniformly scale by `other`, treating points as complex numbers
    pub fn rotate(self, other: impl Into<Curve>) -> Self {
        Curve::binary(BinaryOp::Rotate, self, other.into())
    }

    /// Run `self` then `other`, each in half the time
    pub fn concat(self, other: impl Into<Curve>) -> Self {
        Curve::binary(BinaryOp::Concat, self, other.into())
    }

    pub fn repeat(self, times: f64) -> Self {
        Curve::unary(UnaryOp::Repeat(times), self)
    }

    pub fn step(self, steps: f64) -> Self {
        Curve::unary(UnaryOp::Step(steps), self)
    }

    pub fn reverse(self) -> Self {
        Curve::unary(UnaryOp::Reverse, self)
    }

    /// Repeat `times` traversals, every other one reversed.
    ///
    /// `concat(c, reverse(c))` starts and ends at `c(0)`, so the seams of the
    /// repeat are continuous even when `c` is not periodic.
    pub fn boustro(self, times: f64) -> Self {
        self.clone().concat(self.reverse()).repeat(times / 2.0)
    }
}

// =============================================================================
// Evaluation
// =============================================================================

impl Curve {
    /// Evaluate the curve at `t`.
    ///
    /// Pure and total: the same node at the same `t` always yields the same
    /// point, and no input makes evaluation fail.
    pub fn evaluate(&self, t: f64) -> Point {
        match self {
            Curve::Circle => {
                let theta = 2.0 * PI * t;
                Point::new(theta.sin(), theta.cos())
            }
            Curve::Line => Point::new(t, t),
            Curve::Constant(p) => *p,
            Curve::Function(f) => f(t),
            Curve::Binary { op, a, b } => match op {
                BinaryOp::Concat => {
                    if t < 0.5 {
                        a.evaluate(t * 2.0)
                    } else {
                        b.evaluate(t * 2.0 - 1.0)
                    }
                }
                _ => combine(*op, a.evaluate(t), b.evaluate(t)),
            },
            Curve::Unary { op, curve } => match *op {
                UnaryOp::Repeat(times) => curve.evaluate((t * times).rem_euclid(1.0)),
                UnaryOp::Step(steps) => curve.evaluate((t * steps).floor() / steps),
                UnaryOp::Reverse => curve.evaluate(1.0 - t),
            },
        }
    }
}

/// Combine two points for a pointwise operator
fn combine(op: BinaryOp, a: Point, b: Point) -> Point {
    match op {
        BinaryOp::Translate => Point::new(a.x + b.x, a.y + b.y),
        BinaryOp::Scale => Point::new(a.x * b.x, a.y * b.y),
        BinaryOp::Rotate => Point::new(a.x * b.x - a.y * b.y, a.y * b.x + a.x * b.y),
        BinaryOp::Concat => unreachable!("concat is not pointwise"),
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<f64> for Curve {
    fn from(n: f64) -> Self {
        Curve::Constant(Point::new(n, n))
    }
}

impl From<(f64, f64)> for Curve {
    fn from(pair: (f64, f64)) -> Self {
        Curve::Constant(pair.into())
    }
}

impl From<Point> for Curve {
    fn from(p: Point) -> Self {
        Curve::Constant(p)
    }
}

// =============================================================================
// Display
// =============================================================================

/// Curves display as postfix source that rebuilds the same tree.
///
/// Combinators receive their operands in popped order, so the first
/// argument is written last.
impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Circle => write!(f, "circle"),
            Curve::Line => write!(f, "line"),
            Curve::Constant(p) => write!(f, "({}, {})", p.x, p.y),
            Curve::Function(_) => write!(f, "<function>"),
            Curve::Binary { op, a, b } => write!(f, "{} {} {}", b, a, op.name()),
            Curve::Unary { op, curve } => match op {
                UnaryOp::Repeat(times) => write!(f, "{} {} repeat", times, curve),
                UnaryOp::Step(steps) => write!(f, "{} {} step", steps, curve),
                UnaryOp::Reverse => write!(f, "{} reverse", curve),
            },
        }
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Circle => write!(f, "Circle"),
            Curve::Line => write!(f, "Line"),
            Curve::Constant(p) => f.debug_tuple("Constant").field(p).finish(),
            Curve::Function(_) => write!(f, "Function(..)"),
            Curve::Binary { op, a, b } => f
                .debug_struct("Binary")
                .field("op", op)
                .field("a", a)
                .field("b", b)
                .finish(),
            Curve::Unary { op, curve } => f
                .debug_struct("Unary")
                .field("op", op)
                .field("curve", curve)
                .finish(),
        }
    }
}
