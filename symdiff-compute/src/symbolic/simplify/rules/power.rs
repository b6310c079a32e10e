//! Simplification rules for power expressions.

use crate::symbolic::{
    simplify::{rules::fold_constants, step::Step},
    step_collector::StepCollector,
};
use symdiff_parser::{Expr, Op};

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, though it may be undefined in other mathematical
/// contexts.
pub fn power_zero(_: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_number(0.0) {
        return None;
    }

    step_collector.push(Step::PowerZero);
    Some(Expr::number(1.0))
}

/// `a^1 = a`
pub fn power_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_number(1.0) {
        return None;
    }

    step_collector.push(Step::PowerOne);
    Some(lhs.clone())
}

/// Applies all power rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(lhs, rhs, step_collector)
        .or_else(|| power_one(lhs, rhs, step_collector))
        .or_else(|| fold_constants(Op::Pow, lhs, rhs, step_collector))
}
