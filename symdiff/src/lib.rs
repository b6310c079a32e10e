//! Differentiates prefix-notation arithmetic expressions and simplifies the result.
//!
//! This crate ties together the stages implemented by the rest of the workspace:
//!
//! 1. [`symdiff_parser`] tokenizes and parses the input into an [`Expr`] tree.
//! 2. [`symdiff_compute::symbolic::derivative`] differentiates the tree.
//! 3. [`symdiff_compute::symbolic::simplify`] removes the redundant terms the derivative
//!    introduces.
//! 4. The simplified tree is printed back into prefix notation.
//!
//! ```
//! use symdiff::differentiate_and_simplify;
//!
//! assert_eq!(differentiate_and_simplify("(^ x 3)").unwrap(), "(* 3 (^ x 2))");
//! assert_eq!(differentiate_and_simplify("(sin x)").unwrap(), "(cos x)");
//! ```
//!
//! Every stage reports failure with a [`symdiff_error::Error`], which can be rendered as a
//! diagnostic against the original input with [`Error::report_to_stderr`].

pub use symdiff_compute::symbolic::{derivative, simplify};
pub use symdiff_error::Error;
pub use symdiff_parser::{parse, Expr, Op};

use symdiff_compute::symbolic::{derivative_with, Variable};
use symdiff_parser::{parser::DEFAULT_MAX_DEPTH, Parser};
use tracing::{debug, instrument};

/// Options that control the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The symbol to differentiate with respect to. If [`None`], every symbol in the expression
    /// is treated as the differentiation variable.
    pub variable: Option<String>,

    /// The maximum nesting depth of parenthesized lists the parser accepts.
    ///
    /// This bounds the recursion depth of every stage of the pipeline.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            variable: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    /// Wraps the given [`Options`] into a builder for further customization.
    pub fn into_builder(self) -> OptionsBuilder {
        OptionsBuilder(self)
    }

    /// Returns the [`Variable`] the derivative is taken with respect to.
    fn variable(&self) -> Variable {
        match &self.variable {
            Some(name) => Variable::Named(name),
            None => Variable::Any,
        }
    }
}

/// Helper struct to build an [`Options`] struct.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptionsBuilder(Options);

impl OptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the symbol to differentiate with respect to. See [`Options::variable`] for more
    /// information.
    pub fn variable(mut self, variable: impl Into<String>) -> Self {
        self.0.variable = Some(variable.into());
        self
    }

    /// Sets the maximum nesting depth. See [`Options::max_depth`] for more information.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.0.max_depth = max_depth;
        self
    }

    /// Builds the [`Options`] struct.
    pub fn build(self) -> Options {
        self.0
    }
}

/// Parses the given text, differentiates it with every symbol as the variable, simplifies the
/// derivative, and prints it back into prefix notation.
pub fn differentiate_and_simplify(text: &str) -> Result<String, Error> {
    differentiate_and_simplify_with(text, &Options::default())
}

/// Runs the pipeline with the given [`Options`].
#[instrument(level = "debug", skip(options), fields(variable = ?options.variable))]
pub fn differentiate_and_simplify_with(text: &str, options: &Options) -> Result<String, Error> {
    let expr = Parser::new(text)
        .with_max_depth(options.max_depth)
        .try_parse_full::<Expr>()?;
    let deriv = derivative_with(&expr, options.variable())?;
    let simplified = simplify(&deriv)?;
    debug!(%simplified, "done");
    Ok(simplified.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symdiff_compute::symbolic::{
        derivative::error::{ArityMismatch, InvalidOperator},
        simplify::error::DivisionByZero,
    };
    use symdiff_parser::parser::error::{
        EmptyInput,
        ExpectedEof,
        TooDeeplyNested,
        UnclosedParenthesis,
    };
    use super::*;

    #[test]
    fn end_to_end() {
        let cases = [
            ("(+ x 1)", "1"),
            ("(* x 2)", "2"),
            ("(^ x 3)", "(* 3 (^ x 2))"),
            ("(* x x)", "(+ x x)"),
            ("(/ 2 (+ 1 x))", "(/ -2 (^ (+ 1 x) 2))"),
            ("(sin x)", "(cos x)"),
        ];

        for (input, expected) in cases {
            assert_eq!(differentiate_and_simplify(input).unwrap(), expected, "d/dx {input}");
        }
    }

    #[test]
    fn atoms() {
        assert_eq!(differentiate_and_simplify("42").unwrap(), "0");
        assert_eq!(differentiate_and_simplify("-0.5").unwrap(), "0");
        assert_eq!(differentiate_and_simplify("x").unwrap(), "1");
        assert_eq!(differentiate_and_simplify("  y\n").unwrap(), "1");
    }

    #[test]
    fn more_functions() {
        assert_eq!(differentiate_and_simplify("(cos x)").unwrap(), "(* -1 (sin x))");
        assert_eq!(differentiate_and_simplify("(exp x)").unwrap(), "(exp x)");
        assert_eq!(differentiate_and_simplify("(ln x)").unwrap(), "(/ 1 x)");
        assert_eq!(differentiate_and_simplify("(tan x)").unwrap(), "(/ 1 (^ (cos x) 2))");
        assert_eq!(
            differentiate_and_simplify("(sin (* 2 x))").unwrap(),
            "(* 2 (cos (* 2 x)))",
        );
    }

    #[test]
    fn named_variable() {
        let options = OptionsBuilder::new().variable("x").build();
        assert_eq!(differentiate_and_simplify_with("(* a x)", &options).unwrap(), "a");
        assert_eq!(differentiate_and_simplify_with("(+ y 3)", &options).unwrap(), "0");
        assert_eq!(
            differentiate_and_simplify_with("(* x y)", &options).unwrap(),
            "y",
        );

        // with every symbol as the variable, `y` derives to `1` too
        assert_eq!(differentiate_and_simplify("(* x y)").unwrap(), "(+ x y)");
    }

    #[test]
    fn options_builder() {
        let options = Options::default()
            .into_builder()
            .variable("t")
            .max_depth(8)
            .build();
        assert_eq!(options, Options { variable: Some("t".to_string()), max_depth: 8 });
        assert_eq!(OptionsBuilder::new().build(), Options::default());
    }

    #[test]
    fn max_depth() {
        let input = "(sin (sin (sin (sin x))))";
        let shallow = OptionsBuilder::new().max_depth(3).build();
        let err = differentiate_and_simplify_with(input, &shallow).unwrap_err();
        assert!(err.is::<TooDeeplyNested>());

        let deep = OptionsBuilder::new().max_depth(4).build();
        assert!(differentiate_and_simplify_with(input, &deep).is_ok());
    }

    #[test]
    fn parse_errors() {
        assert!(differentiate_and_simplify("").unwrap_err().is::<EmptyInput>());
        assert!(differentiate_and_simplify("(+ x 1").unwrap_err().is::<UnclosedParenthesis>());
        assert!(differentiate_and_simplify("(+ x 1))").unwrap_err().is::<UnclosedParenthesis>());
        assert!(differentiate_and_simplify("x y").unwrap_err().is::<ExpectedEof>());
    }

    #[test]
    fn compute_errors() {
        // the exponent is never differentiated, so its operators are not checked
        assert_eq!(
            differentiate_and_simplify("(^ x (foo 2))").unwrap(),
            "(* (foo 2) (^ x (- (foo 2) 1)))",
        );

        let err = differentiate_and_simplify("(^ (foo x) 2)").unwrap_err();
        assert!(err.is::<InvalidOperator>());

        let err = differentiate_and_simplify("(+ x 1 2)").unwrap_err();
        assert!(err.is::<ArityMismatch>());

        // the derivative of `(/ x 0)` divides by `(^ 0 2)`, which folds to `0`
        let err = differentiate_and_simplify("(/ x 0)").unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn output_round_trips() {
        let inputs = [
            "(/ 2 (+ 1 x))",
            "(* (sin x) (exp (* 3 x)))",
            "(- (^ x 4) (/ 1 x))",
            "(ln (+ (^ x 2) 1))",
            "(/ (* 0.1 x) 3)",
        ];

        for input in inputs {
            let output = differentiate_and_simplify(input).unwrap();
            let reparsed = parse(&output).unwrap();
            assert_eq!(reparsed.to_string(), output);
            assert_eq!(simplify(&reparsed).unwrap(), reparsed, "simplifying {output}");
        }
    }

    #[test]
    fn report_covers_input() {
        let input = "(/ x 0)";
        let err = differentiate_and_simplify(input).unwrap_err();
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        let report = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(report.contains("division by zero"), "{report}");
    }
}
