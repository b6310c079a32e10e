//! Symbolic differentiation and simplification of expressions parsed by [`symdiff_parser`].
//!
//! See the [`symbolic`] module for details.

pub mod symbolic;
