use logos::Logos;
use std::ops::Range;

/// The raw lexemes recognized by the tokenizer. Whitespace separates lexemes and is skipped.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
#[logos(skip r"\s+")]
pub enum Lexeme {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// Any maximal run of characters that are neither whitespace nor parentheses.
    #[regex(r"[^\s()]+")]
    Atom,
}

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    OpenParen,

    CloseParen,

    /// An atom that parses as a finite floating-point literal, such as `2`, `-0.5` or `1e-3`.
    Number(f64),

    /// Any other atom, such as `x`, `sin`, `+` or `inf`.
    Symbol,
}

impl TokenKind {
    /// Classifies an atom as either a number or a symbol.
    ///
    /// An atom is a number if it parses as a **finite** [`f64`]. Literals like `inf`, `NaN` or
    /// `1e400` (which overflows to infinity) are symbols, so that every number in an expression
    /// tree can be printed and parsed back to the same value.
    pub fn classify(atom: &str) -> Self {
        match atom.parse::<f64>() {
            Ok(value) if value.is_finite() => TokenKind::Number(value),
            _ => TokenKind::Symbol,
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
