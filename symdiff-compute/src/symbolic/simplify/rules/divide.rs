//! Simplification rules for division.

use crate::symbolic::{
    simplify::{error::DivisionByZero, rules::fold_constants, step::Step},
    step_collector::StepCollector,
};
use symdiff_error::Error;
use symdiff_parser::{Expr, Op};

/// Returns an error if the denominator is the literal `0`.
pub fn check_denominator(lhs: &Expr, rhs: &Expr) -> Result<(), Error> {
    if rhs.is_number(0.0) {
        let quotient = Expr::binary(Op::Div, lhs.clone(), rhs.clone());
        return Err(Error::spanless(DivisionByZero { quotient: quotient.to_string() }));
    }

    Ok(())
}

/// `a/1 = a`
pub fn divide_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_number(1.0) {
        return None;
    }

    step_collector.push(Step::DivideOne);
    Some(lhs.clone())
}

/// `a/a = 1`
pub fn divide_equal(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if lhs != rhs {
        return None;
    }

    step_collector.push(Step::DivideEqual);
    Some(Expr::number(1.0))
}

/// Applies all division rules, after checking for division by zero.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Option<Expr>, Error> {
    check_denominator(lhs, rhs)?;

    Ok(divide_one(lhs, rhs, step_collector)
        .or_else(|| fold_constants(Op::Div, lhs, rhs, step_collector))
        .or_else(|| divide_equal(lhs, rhs, step_collector)))
}
