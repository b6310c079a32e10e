mod error_kind;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `ErrorKind` trait (and [`std::fmt::Display`]) for the given type.
///
/// The information of the error is customized with the `error` attribute:
/// ```
/// use symdiff_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "unexpected end of input",
///     labels = ["add something here"],
///     help = "expressions look like `(+ x 1)`",
/// )]
/// pub struct Foo;
///
/// assert_eq!(Foo.to_string(), "unexpected end of input");
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                    |
/// | --------- | ------------------------------------------------------------------------------ |
/// | `message` | The message displayed at the top of the report. Also used for `Display`.      |
/// | `labels`  | An array of label texts, one per span of the error, in the same order.         |
/// | `help`    | Optional help text, describing what the user can do to fix the error.          |
/// | `note`    | Optional note with extra context about the error.                              |
///
/// Each tag accepts an expression. `message`, `help` and `note` must implement
/// [`std::fmt::Display`]; `labels` must be iterable over [`std::fmt::Display`] items. The
/// expressions are evaluated inside a method of the type, so fields can be read through `self`.
/// Only `message` is required.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error_kind::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
