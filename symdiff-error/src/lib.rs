//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an error kind with the regions of source code it
//! originated from.
//!
//! Error kinds are usually plain structs that derive [`ErrorKind`] with the `symdiff-attrs`
//! crate. Every stage of the pipeline returns the same [`Error`] type, so callers can report any
//! failure with [`Error::report_to_stderr`] regardless of where it happened.

#[cfg(test)]
extern crate self as symdiff_error;

use ariadne::{Color, Report, Source};
use std::{
    any::Any,
    fmt::{self, Debug, Display, Formatter},
    io::{self, Write},
    ops::Range,
};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Any + Debug + Display + Send + Sync {
    /// Returns this error kind as [`Any`], so the concrete kind can be recovered from an
    /// [`Error`].
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    ///
    /// This is empty for errors raised after parsing, since the expression tree does not keep
    /// track of where its nodes came from. Reports of such errors highlight the whole input.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that does not point at any particular region of the source code.
    pub fn spanless(kind: impl ErrorKind) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error as a `K`, if it is one.
    pub fn downcast_ref<K: ErrorKind>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str, input: &str) -> Report<(&'a str, Range<usize>)> {
        if self.spans.is_empty() {
            self.kind.build_report(src_id, &[0..input.len()])
        } else {
            self.kind.build_report(src_id, &self.spans)
        }
    }

    /// Writes the report of this error to the given writer.
    pub fn write_report<W: Write>(&self, src_id: &str, input: &str, writer: W) -> io::Result<()> {
        self.build_report(src_id, input)
            .write((src_id, Source::from(input)), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id, input)
            .eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(span) = self.spans.first() {
            write!(f, " (at byte {})", span.start)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
