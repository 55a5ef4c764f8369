//! Expression tree reconstruction from postfix tokens
//!
//! Primitives and literals are pushed as they arrive; a combinator pops as
//! many operands as its arity says, builds a node from them and pushes the
//! node back. The single value left at the end is the tree.
//!
//! Underfull streams do not fail: the [`HistoryStack`] hands out earlier
//! operands again, or zero once nothing was ever pushed, so a malformed
//! stream degrades to a different curve. The only error is an operand that
//! cannot be coerced (e.g. a 3-tuple, or a curve where a count belongs).

use crate::curve::Curve;
use crate::error::CurveError;
use crate::history::HistoryStack;
use crate::operand::Operand;
use crate::token::Token;

/// Rebuild a curve expression from a postfix token stream
pub fn stackparse<'a, I>(tokens: I) -> Result<Curve, CurveError>
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut stack: HistoryStack<Operand> = HistoryStack::new();

    for token in tokens {
        match token {
            Token::Combinator(combinator) => {
                let arity = combinator.arity();
                if stack.depth() < arity {
                    tracing::debug!(
                        combinator = combinator.name(),
                        arity,
                        depth = stack.depth(),
                        "combinator short of operands"
                    );
                }
                let operands = stack.pop_n(arity);
                let node = combinator.apply(operands)?;
                tracing::trace!(combinator = combinator.name(), "applied");
                stack.push(Operand::Curve(node));
            }
            literal => {
                if let Some(operand) = literal.operand() {
                    stack.push(operand);
                }
            }
        }
    }

    stack.pop().into_curve()
}
