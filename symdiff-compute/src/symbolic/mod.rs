//! Symbolic manipulation of expression trees.
//!
//! # Differentiation
//!
//! [`derivative()`] applies the textbook rules (sum, product, quotient, power, and the
//! derivatives of `sin`, `cos`, `tan`, `exp` and `ln`) recursively, multiplying every rule by the
//! derivative of its operand, which applies the chain rule implicitly. The result is **not**
//! simplified, and is usually full of redundant terms such as `(* x 1)` or `(+ 0 1)`.
//!
//! ```
//! use symdiff_compute::symbolic::derivative;
//! use symdiff_parser::parse;
//!
//! let expr = parse("(* x x)").unwrap();
//! let deriv = derivative(&expr).unwrap();
//! assert_eq!(deriv.to_string(), "(+ (* x 1) (* 1 x))");
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] removes those redundant terms by rewriting the tree bottom-up with a small,
//! fixed set of identities (adding zero, multiplying by one, folding constants, and so on). It
//! does **not** combine like terms: `(+ x x)` is already simplified.
//!
//! ```
//! use symdiff_compute::symbolic::{derivative, simplify};
//! use symdiff_parser::parse;
//!
//! let expr = parse("(* x x)").unwrap();
//! let simplified = simplify(&derivative(&expr).unwrap()).unwrap();
//! assert_eq!(simplified.to_string(), "(+ x x)");
//! ```
//!
//! For more information, see the [`mod@derivative`] and [`mod@simplify`] modules.

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, derivative_with, derivative_wrt, Variable};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
