//! Printing of expressions back into prefix notation.
//!
//! Numbers are printed with the shortest decimal representation that parses back into the same
//! [`f64`], without a trailing `.0` (`3.0` prints as `3`). Lists are printed as their items
//! separated by single spaces, inside parentheses.

use std::fmt::{Display, Formatter, Result};
use super::expr::Expr;

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::List(items) => {
                write!(f, "(")?;
                let mut iter = items.iter();
                if let Some(item) = iter.next() {
                    write!(f, "{}", item)?;
                    for item in iter {
                        write!(f, " {}", item)?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::{op::Op, parse};
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(Expr::number(3.0).to_string(), "3");
        assert_eq!(Expr::number(-2.0).to_string(), "-2");
        assert_eq!(Expr::number(0.5).to_string(), "0.5");
        assert_eq!(Expr::number(0.1 + 0.2).to_string(), "0.30000000000000004");
    }

    #[test]
    fn lists() {
        let expr = Expr::binary(
            Op::Mul,
            Expr::number(3.0),
            Expr::binary(Op::Pow, Expr::symbol("x"), Expr::number(2.0)),
        );
        assert_eq!(expr.to_string(), "(* 3 (^ x 2))");
        assert_eq!(Expr::unary(Op::Cos, Expr::symbol("x")).to_string(), "(cos x)");
    }

    #[test]
    fn normalizes_whitespace() {
        assert_eq!(parse("  ( +\tx\n(sin  x) )").unwrap().to_string(), "(+ x (sin x))");
    }

    #[test]
    fn round_trip() {
        let sources = [
            "(/ -2 (^ (+ 1 x) 2))",
            "(* (* 3 (^ x (- 3 1))) 1)",
            "(+ 0.30000000000000004 1e-7)",
            "(tan (exp (ln y)))",
            "(+ 1 2 3)",
        ];

        for source in sources {
            let expr = parse(source).unwrap();
            assert_eq!(parse(&expr.to_string()).unwrap(), expr);
        }
    }
}
