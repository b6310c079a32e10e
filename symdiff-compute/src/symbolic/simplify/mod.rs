//! Simplification of expression trees.
//!
//! The simplifier rewrites the tree bottom-up: every operand of a list is simplified first, then
//! the rules of the list's operator are applied to the simplified operands, at most once. The
//! rules are a small, fixed set of identities, listed in [`Step`]. Lists that are not a binary
//! operator applied to exactly two operands are rebuilt from their simplified children and
//! otherwise left alone.
//!
//! Simplification is idempotent for any tree it accepts: simplifying an already simplified tree
//! returns the same tree.
//!
//! The only possible failure is a division whose denominator simplifies to the literal `0`, which
//! returns a [`DivisionByZero`](error::DivisionByZero) error.

pub mod error;
pub mod rules;
pub mod step;

use crate::symbolic::step_collector::{StepCollector, TraceSteps};
use step::Step;
use symdiff_error::Error;
use symdiff_parser::Expr;
use tracing::debug;

/// Simplifies the given expression.
///
/// Every applied rule is emitted as a `trace` level event; use [`simplify_with_steps`] to collect
/// them instead.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    debug!(%expr, "simplifying");
    let simplified = simplify_with(expr, &mut TraceSteps)?;
    debug!(%simplified, "simplified");
    Ok(simplified)
}

/// Simplifies the given expression, returning the steps taken in the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps)?;
    Ok((simplified, steps))
}

/// Simplifies the given expression, pushing every applied rule to the given step collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    match expr {
        Expr::Number(_) | Expr::Symbol(_) => Ok(expr.clone()),
        Expr::List(items) => {
            let rebuilt = Expr::List(
                items
                    .iter()
                    .map(|item| simplify_with(item, step_collector))
                    .collect::<Result<Vec<_>, _>>()?,
            );

            Ok(rules::all(&rebuilt, step_collector)?.unwrap_or(rebuilt))
        },
    }
}
