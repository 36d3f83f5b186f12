//! CSS rule parsing.
//!
//! This module turns raw CSS text into a flat, ordered [`Stylesheet`]:
//!
//! - [`parse`]: best-effort parse, malformed blocks silently dropped
//! - [`parse_with_skips`]: same parse, plus one [`Skipped`] entry per
//!   dropped block so hosts can report what was lost
//! - [`stylesheet`]: the [`Rule`]/[`Declaration`] data structures
//!
//! ## Recovery policy
//!
//! The parser never fails on malformed content; it degrades by omission.
//! Comments are stripped first so braces inside them cannot confuse block
//! splitting. The text then splits on `}` into candidate blocks, and a
//! candidate is dropped when it has no `{`, more than one `{` (an unclosed
//! block that swallowed the next one), an empty selector, or a body with no
//! valid declarations. Everything else parses normally, so one bad block
//! cannot take the rest of the stylesheet with it.
//!
//! ## Example
//!
//! ```
//! use lessen::parser::parse;
//!
//! let sheet = parse(".header { color: #333; }\n.header h1 { margin: 0; }");
//! assert_eq!(sheet.len(), 2);
//! assert_eq!(sheet.rules[0].selector, ".header");
//! assert_eq!(sheet.rules[1].declarations[0].property, "margin");
//! ```

pub mod stylesheet;

pub use stylesheet::{Declaration, Rule, Stylesheet};

use thiserror::Error;

/// Why a candidate block was dropped during parsing.
///
/// These are diagnostics, not failures: the parser reports them through
/// [`parse_with_skips`] and keeps going. The `Display` form is what ends up
/// in host-side log lines.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Skipped {
    /// The candidate had no `{` at all (stray text or a stray `}`).
    #[error("skipped block without '{{': {0:?}")]
    MissingBrace(String),

    /// The candidate had more than one `{`: an unclosed block ran into the
    /// next one, and the fused text cannot be attributed to either.
    #[error("skipped unclosed block that ran into the next: {0:?}")]
    UnbalancedBraces(String),

    /// Nothing but whitespace before the `{`.
    #[error("skipped block with an empty selector: {0:?}")]
    EmptySelector(String),

    /// The body produced no valid `property: value` pairs.
    #[error("skipped block with no valid declarations: {0:?}")]
    NoDeclarations(String),
}

/// Parses CSS text into a flat [`Stylesheet`], dropping malformed blocks.
///
/// Never fails: a stylesheet that is entirely malformed parses to an empty
/// `Stylesheet`. Use [`parse_with_skips`] to observe what was dropped.
pub fn parse(css: &str) -> Stylesheet {
    let (sheet, _) = parse_with_skips(css);
    sheet
}

/// Parses CSS text, returning the stylesheet together with one [`Skipped`]
/// entry per dropped candidate block, in source order.
pub fn parse_with_skips(css: &str) -> (Stylesheet, Vec<Skipped>) {
    let cleaned = strip_comments(css);
    let mut rules = Vec::new();
    let mut skipped = Vec::new();

    for candidate in cleaned.split('}') {
        let block = candidate.trim();
        if block.is_empty() {
            continue;
        }
        match parse_block(block) {
            Ok(rule) => rules.push(rule),
            Err(skip) => {
                log::debug!("{skip}");
                skipped.push(skip);
            }
        }
    }

    log::trace!(
        "parsed {} rules, skipped {} blocks",
        rules.len(),
        skipped.len()
    );
    (Stylesheet::new(rules), skipped)
}

/// Parses one `selector { body` candidate (the closing `}` was consumed by
/// the split).
fn parse_block(block: &str) -> Result<Rule, Skipped> {
    if block.matches('{').count() > 1 {
        return Err(Skipped::UnbalancedBraces(block.to_string()));
    }

    let (selector, body) = match block.split_once('{') {
        Some(parts) => parts,
        None => return Err(Skipped::MissingBrace(block.to_string())),
    };

    let selector = selector.trim();
    if selector.is_empty() {
        return Err(Skipped::EmptySelector(block.to_string()));
    }

    let declarations = parse_declarations(body);
    if declarations.is_empty() {
        return Err(Skipped::NoDeclarations(block.to_string()));
    }

    Ok(Rule::new(selector, declarations))
}

/// Splits a rule body on `;` and each fragment once on the first `:`.
/// Fragments without a `:`, or with an empty property or value, are dropped
/// (trailing semicolons, blank lines, junk from broken blocks).
fn parse_declarations(body: &str) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    for fragment in body.split(';') {
        if let Some((property, value)) = fragment.split_once(':') {
            let property = property.trim();
            let value = value.trim();
            if !property.is_empty() && !value.is_empty() {
                declarations.push(Declaration::new(property, value));
            }
        }
    }
    declarations
}

/// Removes `/* ... */` comments. Non-greedy, spans newlines; an unterminated
/// comment swallows the rest of the input.
fn strip_comments(source: &str) -> String {
    let mut cleaned = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
            continue;
        }
        cleaned.push(c);
    }
    cleaned
}
