pub mod token;

use logos::{Lexer, Logos};
pub use token::{Lexeme, Token, TokenKind};

/// Returns an iterator over the raw lexemes produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<Lexeme> {
    Lexeme::lexer(input)
}

/// Returns an owned array containing all of the classified tokens in the input.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let kind = match lexeme {
            Ok(Lexeme::OpenParen) => TokenKind::OpenParen,
            Ok(Lexeme::CloseParen) => TokenKind::CloseParen,
            // every character is either whitespace, a parenthesis, or part of an atom, so the
            // lexer cannot fail; anything it does not recognize is treated as an atom anyway
            Ok(Lexeme::Atom) | Err(()) => TokenKind::classify(lexer.slice()),
        };

        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}
