use symdiff_parser::Op;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -1*a`
    SubtractFromZero,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `a*a = a^2`
    SquareEqualFactors,

    /// `a/1 = a`
    DivideOne,

    /// `a/a = 1`
    DivideEqual,

    /// `a^0 = 1`
    PowerZero,

    /// `a^1 = a`
    PowerOne,

    /// `2+3 = 5`, `2^3 = 8`, etc.
    FoldConstants(Op),
}
