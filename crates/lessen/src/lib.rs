//! CSS to LESS conversion.
//!
//! `lessen` takes flat, whitespace-combinator CSS and rewrites it as nested
//! LESS, optionally pulling repeated literal values out into named
//! variables. The pipeline has four stages, each usable on its own:
//!
//! 1. [`parser`]: raw text to a flat, ordered [`Stylesheet`]; malformed
//!    blocks are dropped, never fatal
//! 2. [`nest`]: flat rules to a tree keyed by selector segments
//! 3. [`variables`]: optional scan of the flat rules for color, font-size
//!    and spacing literals worth naming
//! 4. [`render`]: tree (plus optional variables) to indented LESS text
//!
//! Most callers only need the two top-level entry points:
//!
//! ```
//! let less = lessen::convert_basic(".header { color: #333; }");
//! assert_eq!(less, ".header {\n  color: #333;\n}\n\n");
//! ```
//!
//! ```
//! let css = ".header { color: #333; }\n.content { color: #333; }";
//! let less = lessen::convert_with_variables(css);
//! assert!(less.starts_with("// Variables\n@color-1: #333;\n\n"));
//! assert_eq!(less.matches("color: @color-1;").count(), 2);
//! ```
//!
//! Conversion never fails on malformed content; see [`parser::parse_with_skips`]
//! for observing what a lossy parse dropped. At-rules, non-whitespace
//! combinators and comma-separated selector lists are out of scope: such
//! selectors are carried through as opaque segment text.

pub mod error;
pub mod nest;
pub mod parser;
pub mod render;
pub mod variables;

pub use error::{Error, Result};
pub use nest::{build_tree, SelectorNode};
pub use parser::{parse, parse_with_skips, Declaration, Rule, Skipped, Stylesheet};
pub use render::render;
pub use variables::{classify, extract_variables, Category, Variable, VariableSet};

/// Converts CSS to nested LESS without variable extraction.
///
/// ```
/// let css = ".header { color: #333; }\n.header h1 { font-size: 24px; }";
/// let less = lessen::convert_basic(css);
/// assert!(less.contains(".header {"));
/// assert!(less.contains("  h1 {"));
/// assert!(less.contains("    font-size: 24px;"));
/// ```
pub fn convert_basic(css: &str) -> String {
    let sheet = parser::parse(css);
    render::render(&nest::build_tree(&sheet), None)
}

/// Converts CSS to nested LESS with repeated literals extracted into
/// `@color-N`, `@font-size-N` and `@spacing-N` variables.
///
/// When nothing in the input classifies for extraction the output is the
/// same as [`convert_basic`]: no preamble, values untouched.
///
/// ```
/// let less = lessen::convert_with_variables(".box { padding: 20px; }");
/// assert!(less.starts_with("// Variables\n@spacing-1: 20px;\n\n"));
/// assert!(less.contains("padding: @spacing-1;"));
/// ```
pub fn convert_with_variables(css: &str) -> String {
    let sheet = parser::parse(css);
    let vars = variables::extract_variables(&sheet);
    render::render(&nest::build_tree(&sheet), Some(&vars))
}
