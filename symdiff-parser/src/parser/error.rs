use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

/// The input did not contain a single token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = ["there is nothing to parse here"],
    help = format!("write an expression in prefix notation, such as {}", "(* x x)".fg(EXPR)),
)]
pub struct EmptyInput;

/// The end of the token stream was reached where an expression was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "input".fg(EXPR))],
    help = "only one expression can be differentiated at a time",
)]
pub struct ExpectedEof;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this, or remove this one"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = [format!("add an {} and its operands here", "operator".fg(EXPR))],
)]
pub struct EmptyParenthesis;

/// Lists were nested deeper than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expression is nested more than {} levels deep", self.limit),
    labels = ["this list exceeds the nesting limit"],
)]
pub struct TooDeeplyNested {
    /// The maximum nesting depth of the parser.
    pub limit: usize,
}
