//! Tokens of the postfix curve notation
//!
//! A token stream is a flat, postfix rendering of a curve expression:
//! operands first, then the combinator that consumes them. Each combinator
//! has a fixed arity, looked up from a static table rather than discovered
//! at runtime.

use crate::combinators;
use crate::curve::Curve;
use crate::error::CurveError;
use crate::operand::Operand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Curve constructors that consume operands from the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    Translate,
    Scale,
    Rotate,
    Concat,
    Repeat,
    Step,
    Reverse,
    Boustro,
}

/// Source spellings of every combinator, including the operator aliases.
pub const COMBINATOR_NAMES: &[(&str, Combinator)] = &[
    ("translate", Combinator::Translate),
    ("+", Combinator::Translate),
    ("scale", Combinator::Scale),
    ("*", Combinator::Scale),
    ("rotate", Combinator::Rotate),
    ("concat", Combinator::Concat),
    ("repeat", Combinator::Repeat),
    ("**", Combinator::Repeat),
    ("step", Combinator::Step),
    ("//", Combinator::Step),
    ("reverse", Combinator::Reverse),
    ("boustro", Combinator::Boustro),
];

impl Combinator {
    /// Number of operands the constructor consumes
    pub const fn arity(self) -> usize {
        match self {
            Combinator::Reverse => 1,
            Combinator::Translate
            | Combinator::Scale
            | Combinator::Rotate
            | Combinator::Concat
            | Combinator::Repeat
            | Combinator::Step
            | Combinator::Boustro => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Combinator::Translate => "translate",
            Combinator::Scale => "scale",
            Combinator::Rotate => "rotate",
            Combinator::Concat => "concat",
            Combinator::Repeat => "repeat",
            Combinator::Step => "step",
            Combinator::Reverse => "reverse",
            Combinator::Boustro => "boustro",
        }
    }

    /// Look up a combinator by any of its spellings
    pub fn lookup(word: &str) -> Option<Combinator> {
        COMBINATOR_NAMES
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, c)| *c)
    }

    /// Apply the constructor to operands given in popped order.
    ///
    /// The first popped operand is the first argument: `[a, b]` popped from
    /// the stack builds `translate(a, b)`, and `[c, n]` builds
    /// `repeat(c, n)`. Missing operands are filled with the zero default.
    pub fn apply(self, operands: Vec<Operand>) -> Result<Curve, CurveError> {
        let mut operands = operands.into_iter();
        let [first, second]: [Operand; 2] =
            std::array::from_fn(|_| operands.next().unwrap_or_default());
        match self {
            Combinator::Translate => combinators::translate(first, second),
            Combinator::Scale => combinators::scale(first, second),
            Combinator::Rotate => combinators::rotate(first, second),
            Combinator::Concat => combinators::concat(first, second),
            Combinator::Repeat => combinators::repeat(first, second.as_scalar()?),
            Combinator::Step => combinators::step(first, second.as_scalar()?),
            Combinator::Reverse => combinators::reverse(first),
            Combinator::Boustro => combinators::boustro(first, second.as_scalar()?),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One element of a postfix token stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Circle,
    Line,
    Number(f64),
    Pair(f64, f64),
    /// Parenthesized literal with other than two components
    Tuple(Vec<f64>),
    Combinator(Combinator),
}

impl Token {
    /// The stack value a literal or primitive token pushes, if any
    pub fn operand(&self) -> Option<Operand> {
        match self {
            Token::Circle => Some(Operand::Curve(Curve::circle())),
            Token::Line => Some(Operand::Curve(Curve::line())),
            Token::Number(n) => Some(Operand::Number(*n)),
            Token::Pair(x, y) => Some(Operand::Pair(*x, *y)),
            Token::Tuple(items) => Some(Operand::Tuple(items.clone())),
            Token::Combinator(_) => None,
        }
    }
}

impl From<Combinator> for Token {
    fn from(c: Combinator) -> Self {
        Token::Combinator(c)
    }
}

impl From<f64> for Token {
    fn from(n: f64) -> Self {
        Token::Number(n)
    }
}

impl From<(f64, f64)> for Token {
    fn from((x, y): (f64, f64)) -> Self {
        Token::Pair(x, y)
    }
}
