//! Core data structures for parsed CSS rules.
//!
//! The parser produces a flat [`Stylesheet`]: an ordered list of [`Rule`]s
//! exactly as they occur in the source text. Selectors are kept as raw
//! strings at this stage; splitting them into nesting segments is the tree
//! builder's job.

/// A single `property: value` pair inside a rule body.
///
/// Both sides are stored trimmed but otherwise verbatim; values are never
/// normalized, so `#333` and `#333333` stay distinct literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// One `selector { ... }` block as written in the source.
///
/// The selector is the raw text before the opening brace, trimmed. Its
/// declarations keep source order; that order is preserved through the tree
/// builder and the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }
}

/// An ordered sequence of rules, in source order.
///
/// Insertion order matters: later rules with the same leading selector
/// segment merge into the same tree node, and their declarations must land
/// after the earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
