//! Symbolic differentiation.
//!
//! The derivative is computed by structural recursion over the expression tree, with one rule
//! per operator:
//!
//! | Expression  | Derivative                                  |
//! | ----------- | ------------------------------------------- |
//! | `c`         | `0`                                         |
//! | `x`         | `1`                                         |
//! | `(+ a b)`   | `(+ a' b')`                                 |
//! | `(- a b)`   | `(- a' b')`                                 |
//! | `(* a b)`   | `(+ (* a b') (* a' b))`                     |
//! | `(/ a b)`   | `(/ (- (* a' b) (* a b')) (^ b 2))`         |
//! | `(^ a b)`   | `(* (* b (^ a (- b 1))) a')`                |
//! | `(sin a)`   | `(* a' (cos a))`                            |
//! | `(cos a)`   | `(* a' (* -1 (sin a)))`                     |
//! | `(tan a)`   | `(/ a' (^ (cos a) 2))`                      |
//! | `(exp a)`   | `(* a' (exp a))`                            |
//! | `(ln a)`    | `(/ a' a)`                                  |
//!
//! The power rule treats the exponent as a constant, even if it contains the variable.

pub mod error;
mod function;

use error::{ArityMismatch, InvalidOperator};
use levenshtein::levenshtein;
use symdiff_error::Error;
use symdiff_parser::{Expr, Op};
use tracing::{debug, trace};

/// The symbols to differentiate with respect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable<'a> {
    /// Every symbol is the differentiation variable, so every symbol derives to `1`.
    Any,

    /// Only the symbol with this name is the differentiation variable. Every other symbol is a
    /// constant and derives to `0`.
    Named(&'a str),
}

impl Variable<'_> {
    /// Returns true if the symbol with the given name is the differentiation variable.
    pub fn matches(self, name: &str) -> bool {
        match self {
            Variable::Any => true,
            Variable::Named(var) => var == name,
        }
    }
}

/// Computes the derivative of the given expression, treating every symbol as the
/// differentiation variable.
///
/// Returns [`Err`] with an [`InvalidOperator`] or [`ArityMismatch`] kind if a list in the
/// expression does not apply a supported operator to the right number of operands.
pub fn derivative(f: &Expr) -> Result<Expr, Error> {
    derivative_with(f, Variable::Any)
}

/// Computes the derivative of the given expression with respect to the symbol `var`. Every other
/// symbol is treated as a constant.
pub fn derivative_wrt(f: &Expr, var: &str) -> Result<Expr, Error> {
    derivative_with(f, Variable::Named(var))
}

/// Computes the derivative of the given expression with respect to the given [`Variable`].
pub fn derivative_with(f: &Expr, var: Variable) -> Result<Expr, Error> {
    debug!(%f, ?var, "differentiating");
    let deriv = derive(f, var)?;
    trace!(%deriv, "unsimplified derivative");
    Ok(deriv)
}

/// The recursive step of [`derivative_with`].
fn derive(f: &Expr, var: Variable) -> Result<Expr, Error> {
    match f {
        Expr::Number(_) => Ok(Expr::number(0.0)),
        Expr::Symbol(name) => Ok(Expr::number(if var.matches(name) { 1.0 } else { 0.0 })),
        Expr::List(_) => {
            let op = match f.operator() {
                Some(name) => Op::from_symbol(name).ok_or_else(|| invalid_operator(name))?,
                None => {
                    let name = f.head().map_or_else(|| f.to_string(), |head| head.to_string());
                    return Err(invalid_operator(&name));
                },
            };

            match (op, f.operands()) {
                (Op::Add | Op::Sub, [a, b]) => sum_rule(op, a, b, var),
                (Op::Mul, [a, b]) => product_rule(a, b, var),
                (Op::Div, [a, b]) => quotient_rule(a, b, var),
                (Op::Pow, [a, b]) => power_rule(a, b, var),
                (Op::Sin, [a]) => Ok(function::sin(a, derive(a, var)?)),
                (Op::Cos, [a]) => Ok(function::cos(a, derive(a, var)?)),
                (Op::Tan, [a]) => Ok(function::tan(a, derive(a, var)?)),
                (Op::Exp, [a]) => Ok(function::exp(a, derive(a, var)?)),
                (Op::Ln, [a]) => Ok(function::ln(a, derive(a, var)?)),
                (op, operands) => Err(Error::spanless(ArityMismatch {
                    op,
                    expected: op.arity(),
                    found: operands.len(),
                })),
            }
        },
    }
}

/// Builds an [`InvalidOperator`] error, suggesting supported operators with similar names.
fn invalid_operator(name: &str) -> Error {
    let suggestions = Op::ALL
        .iter()
        .map(|op| op.symbol())
        .filter(|symbol| levenshtein(symbol, name) < 2)
        .collect();

    Error::spanless(InvalidOperator { name: name.to_owned(), suggestions })
}

/// `(f ± g)' = f' ± g'`
fn sum_rule(op: Op, a: &Expr, b: &Expr, var: Variable) -> Result<Expr, Error> {
    Ok(Expr::binary(op, derive(a, var)?, derive(b, var)?))
}

/// `(f * g)' = f * g' + f' * g`
fn product_rule(a: &Expr, b: &Expr, var: Variable) -> Result<Expr, Error> {
    Ok(Expr::binary(
        Op::Add,
        Expr::binary(Op::Mul, a.clone(), derive(b, var)?),
        Expr::binary(Op::Mul, derive(a, var)?, b.clone()),
    ))
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(a: &Expr, b: &Expr, var: Variable) -> Result<Expr, Error> {
    let numerator = Expr::binary(
        Op::Sub,
        Expr::binary(Op::Mul, derive(a, var)?, b.clone()),
        Expr::binary(Op::Mul, a.clone(), derive(b, var)?),
    );
    let denominator = Expr::binary(Op::Pow, b.clone(), Expr::number(2.0));
    Ok(Expr::binary(Op::Div, numerator, denominator))
}

/// `(f ^ n)' = n * f ^ (n - 1) * f'`
fn power_rule(a: &Expr, b: &Expr, var: Variable) -> Result<Expr, Error> {
    // the exponent is treated as a constant, even if it contains the variable
    let reduced = Expr::binary(Op::Sub, b.clone(), Expr::number(1.0));
    Ok(Expr::binary(
        Op::Mul,
        Expr::binary(Op::Mul, b.clone(), Expr::binary(Op::Pow, a.clone(), reduced)),
        derive(a, var)?,
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symdiff_parser::parse;
    use super::*;

    /// Parses and differentiates the given source, returning the printed derivative.
    fn deriv(source: &str) -> String {
        derivative(&parse(source).unwrap()).unwrap().to_string()
    }

    /// Parses and differentiates the given source, expecting an error.
    fn deriv_err(source: &str) -> Error {
        derivative(&parse(source).unwrap()).unwrap_err()
    }

    #[test]
    fn constants() {
        for n in [0.0, 1.0, -3.5, 1e10, f64::MAX] {
            assert_eq!(derivative(&Expr::number(n)).unwrap(), Expr::number(0.0));
        }
    }

    #[test]
    fn symbols() {
        for name in ["x", "y", "theta"] {
            assert_eq!(derivative(&Expr::symbol(name)).unwrap(), Expr::number(1.0));
        }
    }

    #[test]
    fn sum_and_difference() {
        assert_eq!(deriv("(+ x 1)"), "(+ 1 0)");
        assert_eq!(deriv("(- 2 x)"), "(- 0 1)");
    }

    #[test]
    fn product() {
        assert_eq!(deriv("(* x 2)"), "(+ (* x 0) (* 1 2))");
    }

    #[test]
    fn quotient() {
        assert_eq!(
            deriv("(/ 2 (+ 1 x))"),
            "(/ (- (* 0 (+ 1 x)) (* 2 (+ 0 1))) (^ (+ 1 x) 2))",
        );
    }

    #[test]
    fn power() {
        assert_eq!(deriv("(^ x 3)"), "(* (* 3 (^ x (- 3 1))) 1)");
    }

    #[test]
    fn chain_rule() {
        assert_eq!(
            deriv("(sin (* 2 x))"),
            "(* (+ (* 2 1) (* 0 x)) (cos (* 2 x)))",
        );
    }

    #[test]
    fn named_variable() {
        let expr = parse("(+ (* a x) y)").unwrap();
        assert_eq!(
            derivative_wrt(&expr, "x").unwrap().to_string(),
            "(+ (+ (* a 1) (* 0 x)) 0)",
        );
        assert_eq!(
            derivative_wrt(&expr, "y").unwrap().to_string(),
            "(+ (+ (* a 0) (* 0 x)) 1)",
        );
    }

    #[test]
    fn unknown_operator() {
        let err = deriv_err("(mod x 2)");
        let kind = err.downcast_ref::<InvalidOperator>().unwrap();
        assert_eq!(kind.name, "mod");
        assert!(kind.suggestions.is_empty());
        assert!(err.spans.is_empty());
        assert_eq!(err.to_string(), "unknown operator `mod`");
    }

    #[test]
    fn unknown_operator_nested() {
        let err = deriv_err("(^ (foo x) 2)");
        assert_eq!(err.downcast_ref::<InvalidOperator>().unwrap().name, "foo");
    }

    #[test]
    fn unknown_operator_suggestions() {
        let err = deriv_err("(sinn x)");
        assert_eq!(err.downcast_ref::<InvalidOperator>().unwrap().suggestions, vec!["sin"]);

        let err = deriv_err("(co x)");
        assert_eq!(err.downcast_ref::<InvalidOperator>().unwrap().suggestions, vec!["cos"]);

        // every single-character operator is one substitution away
        let err = deriv_err("(% x 2)");
        assert_eq!(
            err.downcast_ref::<InvalidOperator>().unwrap().suggestions,
            vec!["+", "-", "*", "/", "^"],
        );
    }

    #[test]
    fn non_symbol_head() {
        let err = deriv_err("(2 x)");
        assert_eq!(err.downcast_ref::<InvalidOperator>().unwrap().name, "2");

        let err = deriv_err("((sin) x)");
        assert_eq!(err.downcast_ref::<InvalidOperator>().unwrap().name, "(sin)");
    }

    #[test]
    fn empty_list() {
        let err = derivative(&Expr::List(Vec::new())).unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidOperator>().unwrap().name, "()");
    }

    #[test]
    fn wrong_arity() {
        let err = deriv_err("(+ 1 2 3)");
        assert_eq!(
            err.downcast_ref::<ArityMismatch>(),
            Some(&ArityMismatch { op: Op::Add, expected: 2, found: 3 }),
        );
        assert_eq!(err.to_string(), "`+` expects 2 operands, but 3 were given");

        let err = deriv_err("(sin x y)");
        assert_eq!(
            err.downcast_ref::<ArityMismatch>(),
            Some(&ArityMismatch { op: Op::Sin, expected: 1, found: 2 }),
        );

        let err = deriv_err("(ln)");
        assert_eq!(err.to_string(), "`ln` expects 1 operand, but 0 were given");
    }

    #[test]
    fn operators_are_checked_lazily() {
        // the exponent is never differentiated, so an unknown operator inside it is not reported
        assert_eq!(deriv("(^ x (foo 2))"), "(* (* (foo 2) (^ x (- (foo 2) 1))) 1)");
    }
}
