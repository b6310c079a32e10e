//! Simplification rules for multiplication.

use crate::symbolic::{
    simplify::{rules::fold_constants, step::Step},
    step_collector::StepCollector,
};
use symdiff_parser::{Expr, Op};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_number(0.0) && !rhs.is_number(0.0) {
        return None;
    }

    step_collector.push(Step::MultiplyZero);
    Some(Expr::number(0.0))
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_number(1.0) {
        rhs
    } else if rhs.is_number(1.0) {
        lhs
    } else {
        return None;
    };

    step_collector.push(Step::MultiplyOne);
    Some(opt.clone())
}

/// `a*a = a^2`
///
/// The factors must be structurally equal; `(+ x 1)` and `(+ 1 x)` are not combined.
pub fn square_equal_factors(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if lhs != rhs {
        return None;
    }

    step_collector.push(Step::SquareEqualFactors);
    Some(Expr::binary(Op::Pow, lhs.clone(), Expr::number(2.0)))
}

/// Applies all multiplication rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(lhs, rhs, step_collector)
        .or_else(|| multiply_one(lhs, rhs, step_collector))
        .or_else(|| fold_constants(Op::Mul, lhs, rhs, step_collector))
        .or_else(|| square_equal_factors(lhs, rhs, step_collector))
}
