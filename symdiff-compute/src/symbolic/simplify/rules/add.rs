//! Simplification rules for addition and subtraction.

use crate::symbolic::{
    simplify::{rules::{fold_constants, multiply}, step::Step},
    step_collector::StepCollector,
};
use symdiff_parser::{Expr, Op};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if lhs.is_number(0.0) {
        rhs
    } else if rhs.is_number(0.0) {
        lhs
    } else {
        return None;
    };

    step_collector.push(Step::AddZero);
    Some(opt.clone())
}

/// `0-a = -1*a`
///
/// The product is simplified again, so `0-3` becomes `-3`.
pub fn subtract_from_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_number(0.0) {
        return None;
    }

    step_collector.push(Step::SubtractFromZero);
    let neg_one = Expr::number(-1.0);
    let product = multiply::all(&neg_one, rhs, step_collector)
        .unwrap_or_else(|| Expr::binary(Op::Mul, neg_one, rhs.clone()));
    Some(product)
}

/// `a-0 = a`
pub fn subtract_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_number(0.0) {
        return None;
    }

    step_collector.push(Step::SubtractZero);
    Some(lhs.clone())
}

/// Applies all addition rules.
pub fn add(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_zero(lhs, rhs, step_collector)
        .or_else(|| fold_constants(Op::Add, lhs, rhs, step_collector))
}

/// Applies all subtraction rules.
pub fn subtract(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    subtract_from_zero(lhs, rhs, step_collector)
        .or_else(|| subtract_zero(lhs, rhs, step_collector))
        .or_else(|| fold_constants(Op::Sub, lhs, rhs, step_collector))
}
