//! Derivatives of the unary functions `sin`, `cos`, `tan`, `exp` and `ln`.
//!
//! Each function takes the argument `f` and its already computed derivative `inner`, and performs
//! the chain rule by multiplying (or dividing) by `inner`.

use symdiff_parser::{Expr, Op};

/// `(sin f)' = f' * cos(f)`
pub(super) fn sin(arg: &Expr, inner: Expr) -> Expr {
    Expr::binary(Op::Mul, inner, Expr::unary(Op::Cos, arg.clone()))
}

/// `(cos f)' = f' * (-1 * sin(f))`
pub(super) fn cos(arg: &Expr, inner: Expr) -> Expr {
    Expr::binary(
        Op::Mul,
        inner,
        Expr::binary(Op::Mul, Expr::number(-1.0), Expr::unary(Op::Sin, arg.clone())),
    )
}

/// `(tan f)' = f' / cos(f)^2`
pub(super) fn tan(arg: &Expr, inner: Expr) -> Expr {
    Expr::binary(
        Op::Div,
        inner,
        Expr::binary(Op::Pow, Expr::unary(Op::Cos, arg.clone()), Expr::number(2.0)),
    )
}

/// `(exp f)' = f' * exp(f)`
pub(super) fn exp(arg: &Expr, inner: Expr) -> Expr {
    Expr::binary(Op::Mul, inner, Expr::unary(Op::Exp, arg.clone()))
}

/// `(ln f)' = f' / f`
pub(super) fn ln(arg: &Expr, inner: Expr) -> Expr {
    Expr::binary(Op::Div, inner, arg.clone())
}
