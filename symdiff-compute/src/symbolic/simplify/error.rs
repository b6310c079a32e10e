use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// The denominator of a quotient simplified to the literal `0`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this expression divides by zero once simplified"],
    help = format!("the denominator of {} is zero", self.quotient.as_str().fg(EXPR)),
)]
pub struct DivisionByZero {
    /// The printed form of the quotient, after its operands were simplified.
    pub quotient: String,
}
