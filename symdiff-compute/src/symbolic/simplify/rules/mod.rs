//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the already-simplified operands of a binary
//! operator, and returns `Some(expr)` with the rewritten expression if the rule applies, or `None`
//! if the rule does not apply. The rules of each operator are tried in a fixed order; the first
//! rule that applies wins.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;

use crate::symbolic::step_collector::StepCollector;
use super::step::Step;
use symdiff_error::Error;
use symdiff_parser::{Expr, Op};

/// If both operands are numeric literals, evaluates the binary operator on them.
///
/// The result is only folded if it is finite, so that it can be printed and parsed back.
pub fn fold_constants(
    op: Op,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    let (a, b) = (lhs.as_number()?, rhs.as_number()?);
    let value = match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => a / b,
        Op::Pow => a.powf(b),
        Op::Sin | Op::Cos | Op::Tan | Op::Exp | Op::Ln => return None,
    };

    if !value.is_finite() {
        return None;
    }

    step_collector.push(Step::FoldConstants(op));
    Some(Expr::number(value))
}

/// Applies the rules of the operator at the head of the given list to its operands.
///
/// Returns `Ok(None)` if no rule applies, which includes every expression that is not a binary
/// operator applied to exactly two operands.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    let rewritten = match (expr.operator().and_then(Op::from_symbol), expr.operands()) {
        (Some(Op::Add), [lhs, rhs]) => add::add(lhs, rhs, step_collector),
        (Some(Op::Sub), [lhs, rhs]) => add::subtract(lhs, rhs, step_collector),
        (Some(Op::Mul), [lhs, rhs]) => multiply::all(lhs, rhs, step_collector),
        (Some(Op::Div), [lhs, rhs]) => divide::all(lhs, rhs, step_collector)?,
        (Some(Op::Pow), [lhs, rhs]) => power::all(lhs, rhs, step_collector),
        _ => None,
    };

    Ok(rewritten)
}
