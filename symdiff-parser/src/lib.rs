//! Parsing and printing of arithmetic expressions written in fully-parenthesized prefix notation,
//! such as `(+ (* 2 x) (sin x))`.
//!
//! The [`tokenizer`] splits the source into parentheses and atoms, the [`parser`] builds an
//! [`Expr`] tree from the tokens, and the [`Display`](std::fmt::Display) implementation of
//! [`Expr`] prints a tree back into the same notation.
//!
//! ```
//! use symdiff_parser::{parse, Expr, Op};
//!
//! let expr = parse("(* 2 (sin x))").unwrap();
//! assert_eq!(expr, Expr::binary(
//!     Op::Mul,
//!     Expr::Number(2.0),
//!     Expr::unary(Op::Sin, Expr::symbol("x")),
//! ));
//! assert_eq!(expr.to_string(), "(* 2 (sin x))");
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{expr::Expr, op::Op, parse, Parser};
