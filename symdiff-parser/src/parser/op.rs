use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operators that can appear at the head of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op {
    /// Addition, `(+ a b)`.
    Add,

    /// Subtraction, `(- a b)`.
    Sub,

    /// Multiplication, `(* a b)`.
    Mul,

    /// Division, `(/ a b)`.
    Div,

    /// Exponentiation, `(^ a b)`.
    Pow,

    /// Sine, `(sin a)`.
    Sin,

    /// Cosine, `(cos a)`.
    Cos,

    /// Tangent, `(tan a)`.
    Tan,

    /// The natural exponential function, `(exp a)`.
    Exp,

    /// The natural logarithm, `(ln a)`.
    Ln,
}

impl Op {
    /// Every operator, binary operators first.
    pub const ALL: [Op; 10] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Pow,
        Op::Sin,
        Op::Cos,
        Op::Tan,
        Op::Exp,
        Op::Ln,
    ];

    /// Returns the symbol used to write this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Pow => "^",
            Op::Sin => "sin",
            Op::Cos => "cos",
            Op::Tan => "tan",
            Op::Exp => "exp",
            Op::Ln => "ln",
        }
    }

    /// Returns the operator written with the given symbol, if there is one.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Op::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Returns the number of operands this operator is applied to.
    pub fn arity(self) -> usize {
        match self {
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Pow => 2,
            Op::Sin | Op::Cos | Op::Tan | Op::Exp | Op::Ln => 1,
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter) -> Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in Op::ALL {
            assert_eq!(Op::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn unknown_symbols() {
        assert_eq!(Op::from_symbol("sinh"), None);
        assert_eq!(Op::from_symbol("%"), None);
        assert_eq!(Op::from_symbol("SIN"), None);
    }

    #[test]
    fn arity() {
        assert_eq!(Op::ALL.iter().filter(|op| op.arity() == 2).count(), 5);
        assert_eq!(Op::Ln.arity(), 1);
        assert_eq!(Op::Pow.arity(), 2);
    }
}
