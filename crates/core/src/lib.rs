//! Pic Core: a calculus of 2-D parametric curves
//!
//! Curves are built from three primitives (`circle`, `line`, constants)
//! with seven combinators (`translate`, `scale`, `rotate`, `concat`,
//! `repeat`, `step`, `reverse`) and the derived `boustro`. Expressions can
//! be written directly against [`Curve`] or rebuilt from a flat postfix
//! token stream with [`stackparse`].
//!
//! # Modules
//!
//! - `curve`: the `Curve` tree, its combinators and evaluation
//! - `operand`: coercion of numbers, pairs and functions into curves
//! - `combinators`: coercing free-function forms of the combinators
//! - `error`: `CurveError`
//! - `token`: postfix tokens and the combinator arity table
//! - `history`: the never-underflowing stack used by the tree builder
//! - `builder`: `stackparse`
//! - `sample`: uniform sampling for renderers
//!
//! # Example
//!
//! ```rust
//! use pic_core::{Combinator, Point, Token, stackparse};
//!
//! let tokens = [Token::Circle, Token::Pair(0.0, 1.0), Combinator::Translate.into()];
//! let curve = stackparse(&tokens)?;
//! assert_eq!(curve.evaluate(0.0), Point::new(0.0, 2.0));
//! # Ok::<(), pic_core::CurveError>(())
//! ```

pub mod builder;
pub mod combinators;
pub mod curve;
pub mod error;
pub mod history;
pub mod operand;
pub mod sample;
pub mod token;

pub use builder::stackparse;
pub use curve::{BinaryOp, Curve, CurveFn, Point, UnaryOp};
pub use error::CurveError;
pub use history::{HISTORY_CAPACITY, HistoryStack};
pub use operand::{Operand, wrap};
pub use sample::interpolate;
pub use token::{COMBINATOR_NAMES, Combinator, Token};
