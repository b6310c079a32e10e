use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;
use symdiff_parser::Op;

/// A list was headed by something that is not one of the supported operators.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown operator `{}`", self.name),
    labels = ["this expression applies an operator that cannot be differentiated"],
    help = if self.suggestions.is_empty() {
        format!(
            "the supported operators are: {}",
            Op::ALL.map(|op| format!("`{}`", op.symbol().fg(EXPR))).join(", "),
        )
    } else {
        format!(
            "did you mean {}?",
            self.suggestions.iter().map(|op| format!("`{}`", op.fg(EXPR))).collect::<Vec<_>>().join(" or "),
        )
    },
)]
pub struct InvalidOperator {
    /// The printed form of the head of the list.
    pub name: String,

    /// Supported operators whose names are similar to `name`.
    pub suggestions: Vec<&'static str>,
}

/// A supported operator was applied to the wrong number of operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "`{}` expects {} operand{}, but {} {} given",
        self.op,
        self.expected,
        if self.expected == 1 { "" } else { "s" },
        self.found,
        if self.found == 1 { "was" } else { "were" },
    ),
    labels = ["this expression has the wrong number of operands"],
    help = format!("write it as {}", self.usage().fg(EXPR)),
)]
pub struct ArityMismatch {
    /// The operator being applied.
    pub op: Op,

    /// The number of operands the operator takes.
    pub expected: usize,

    /// The number of operands that were given.
    pub found: usize,
}

impl ArityMismatch {
    /// Returns an example application of the operator with the right number of operands.
    fn usage(&self) -> String {
        match self.expected {
            1 => format!("({} a)", self.op),
            _ => format!("({} a b)", self.op),
        }
    }
}
