pub mod error;
pub mod expr;
pub mod fmt;
pub mod op;

use error::{EmptyInput, ExpectedEof, TooDeeplyNested, UnclosedParenthesis, UnexpectedEof};
use expr::Expr;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use symdiff_error::{Error, ErrorKind};
use tracing::trace;

/// The default maximum nesting depth of lists accepted by a [`Parser`].
///
/// Every later stage walks expression trees recursively, so bounding the depth here bounds the
/// stack usage of the whole pipeline.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A recursive descent parser for expressions in prefix notation. This is the type to use to parse
/// an arbitrary piece of source code into an [`Expr`].
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The length of the source code, in bytes.
    source_len: usize,

    /// The number of lists the cursor is currently inside of.
    depth: usize,

    /// The maximum value `depth` may reach.
    max_depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
            source_len: source.len(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth of lists. Deeper input is rejected with
    /// [`TooDeeplyNested`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Creates an error that points at the current token, or just past the last token if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns an empty span just past the last token. Trailing whitespace is not included.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or [`Parser::eof_span`] if the cursor is at the end
    /// of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an [`UnexpectedEof`] error if there are no more tokens. [`Parser::try_parse_full`]
    /// never reaches this, but a [`Parse`] implementation called directly on an exhausted parser
    /// does.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        let token = self.tokens
            .get(self.cursor)
            .cloned()
            .ok_or_else(|| self.error(UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Runs the given parsing function one nesting level deeper. `open` is the span of the
    /// opening parenthesis of the list being entered, which is reported if the nesting limit is
    /// exceeded.
    pub fn nested<T, F>(&mut self, open: Range<usize>, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        if self.depth >= self.max_depth {
            return Err(Error::new(vec![open], TooDeeplyNested { limit: self.max_depth }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        if self.tokens.is_empty() {
            return Err(Error::new(vec![0..self.source_len], EmptyInput));
        }

        let value = T::parse(self)?;
        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(UnclosedParenthesis { opening: false }))
            },
            Some(token) => Err(Error::new(vec![token.span.start..self.eof_span().end], ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// Parses a complete expression from the given source.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let expr = Parser::new(source).try_parse_full::<Expr>()?;
    trace!(%expr, depth = expr.depth(), "parsed expression");
    Ok(expr)
}
