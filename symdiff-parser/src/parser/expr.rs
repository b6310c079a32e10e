use crate::tokenizer::TokenKind;
use std::ops::Range;
use super::{
    error::{EmptyParenthesis, UnclosedParenthesis},
    op::Op,
    Parse,
    Parser,
};
use symdiff_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression tree.
///
/// Equality is structural: two expressions are equal if they are the same variant with equal
/// contents, compared recursively. It is not mathematical equality; `(+ x 1)` and `(+ 1 x)` are
/// different expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric literal, such as `2` or `-0.5`.
    Number(f64),

    /// An identifier, such as `x`.
    Symbol(String),

    /// A function application, such as `(+ x 1)`. The first item names the operator and the
    /// remaining items are its operands.
    List(Vec<Expr>),
}

impl Expr {
    /// Creates a numeric literal.
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    /// Creates a symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Symbol(name.into())
    }

    /// Creates the application of a unary operator, such as `(sin a)`.
    pub fn unary(op: Op, arg: Expr) -> Self {
        Expr::List(vec![Expr::Symbol(op.symbol().to_owned()), arg])
    }

    /// Creates the application of a binary operator, such as `(+ a b)`.
    pub fn binary(op: Op, lhs: Expr, rhs: Expr) -> Self {
        Expr::List(vec![Expr::Symbol(op.symbol().to_owned()), lhs, rhs])
    }

    /// Returns the value of this expression if it is a numeric literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this expression is the numeric literal `value`.
    pub fn is_number(&self, value: f64) -> bool {
        self.as_number() == Some(value)
    }

    /// Returns the first item of a list, which names the operator being applied.
    pub fn head(&self) -> Option<&Expr> {
        match self {
            Expr::List(items) => items.first(),
            _ => None,
        }
    }

    /// Returns the name of the operator being applied, if this is a list whose head is a symbol.
    pub fn operator(&self) -> Option<&str> {
        match self.head()? {
            Expr::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the operands of a list, or an empty slice for any other expression.
    pub fn operands(&self) -> &[Expr] {
        match self {
            Expr::List(items) if !items.is_empty() => &items[1..],
            _ => &[],
        }
    }

    /// Returns the depth of the expression tree. Leaves have depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, depth)) = stack.pop() {
            max = max.max(depth);
            if let Expr::List(items) = expr {
                stack.extend(items.iter().map(|item| (item, depth + 1)));
            }
        }
        max
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Symbol => Ok(Expr::Symbol(token.lexeme.to_owned())),
            TokenKind::OpenParen => input.nested(token.span.clone(), |input| parse_list(input, token.span)),
            TokenKind::CloseParen => Err(Error::new(
                vec![token.span],
                UnclosedParenthesis { opening: false },
            )),
        }
    }
}

/// Parses the items of a list up to and including the closing parenthesis. `open` is the span of
/// the opening parenthesis, which has already been consumed.
fn parse_list(input: &mut Parser, open: Range<usize>) -> Result<Expr, Error> {
    let mut items = Vec::new();

    loop {
        match input.current_token().map(|token| token.kind) {
            None => return Err(Error::new(vec![open], UnclosedParenthesis { opening: true })),
            Some(TokenKind::CloseParen) => {
                let close = input.next_token()?.span;
                if items.is_empty() {
                    return Err(Error::new(vec![open.start..close.end], EmptyParenthesis));
                }
                return Ok(Expr::List(items));
            },
            Some(_) => items.push(Expr::parse(input)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(
            Expr::binary(Op::Pow, Expr::symbol("x"), Expr::number(2.0)),
            Expr::List(vec![
                Expr::Symbol("^".to_string()),
                Expr::Symbol("x".to_string()),
                Expr::Number(2.0),
            ]),
        );
        assert_eq!(
            Expr::unary(Op::Ln, Expr::symbol("y")),
            Expr::List(vec![Expr::Symbol("ln".to_string()), Expr::Symbol("y".to_string())]),
        );
    }

    #[test]
    fn accessors() {
        let expr = Expr::binary(Op::Mul, Expr::number(3.0), Expr::symbol("x"));
        assert_eq!(expr.operator(), Some("*"));
        assert_eq!(expr.operands(), &[Expr::number(3.0), Expr::symbol("x")]);
        assert_eq!(expr.operands()[0].as_number(), Some(3.0));
        assert!(expr.operands()[0].is_number(3.0));
        assert!(!expr.operands()[1].is_number(3.0));

        let leaf = Expr::symbol("x");
        assert_eq!(leaf.operator(), None);
        assert!(leaf.operands().is_empty());

        let odd_head = Expr::List(vec![Expr::number(1.0), Expr::number(2.0)]);
        assert_eq!(odd_head.operator(), None);
        assert_eq!(odd_head.head(), Some(&Expr::number(1.0)));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert!(Expr::number(-0.0).is_number(0.0));
    }

    #[test]
    fn depth() {
        assert_eq!(Expr::symbol("x").depth(), 1);
        let expr = Expr::binary(
            Op::Add,
            Expr::unary(Op::Sin, Expr::unary(Op::Cos, Expr::symbol("x"))),
            Expr::number(1.0),
        );
        assert_eq!(expr.depth(), 4);
    }

    #[test]
    fn structural_equality_is_syntactic() {
        let a = Expr::binary(Op::Add, Expr::symbol("x"), Expr::number(1.0));
        let b = Expr::binary(Op::Add, Expr::number(1.0), Expr::symbol("x"));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
