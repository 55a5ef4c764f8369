//! Coercion errors
//!
//! Curve evaluation is total over the reals, so the only thing that can go
//! wrong is handing a combinator something that is not a curve, a callable,
//! a number or a pair. That is reported once, at construction time.

/// Error raised while coercing an operand into a curve.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveError {
    /// The operand has a shape the coercion layer does not accept.
    InvalidOperand {
        /// The offending value, rendered for display
        value: String,
        /// Shape of the offending value (e.g. "3-tuple", "curve")
        shape: String,
        /// What the combinator expected instead
        expected: &'static str,
    },
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::InvalidOperand {
                value,
                shape,
                expected,
            } => write!(f, "Expected {}, got {}, a {}", expected, value, shape),
        }
    }
}

impl std::error::Error for CurveError {}
