//! Selector tree construction.
//!
//! Flat CSS repeats ancestry in every selector: `.header`, `.header h1`,
//! `.header h1 a`. This module folds that repetition into a tree so the
//! renderer can emit nested LESS blocks instead.
//!
//! Selectors are split on whitespace into segments, and each segment becomes
//! one level of nesting. Combinator tokens (`>`, `+`, `~`) are not given any
//! special meaning; they are segments like any other, which keeps the
//! builder faithful to the source at the cost of some nesting depth.
//!
//! ```
//! use lessen::{nest::build_tree, parser::parse};
//!
//! let sheet = parse(".header { color: #333; } .header h1 { margin: 0; }");
//! let root = build_tree(&sheet);
//! let header = root.get(".header").unwrap();
//! assert_eq!(header.declarations[0].property, "color");
//! assert!(header.get("h1").is_some());
//! ```

use indexmap::IndexMap;

use crate::parser::{Declaration, Stylesheet};

/// One level of the selector hierarchy.
///
/// The root returned by [`build_tree`] is anonymous: it carries no
/// declarations of its own and its children are the top-level selector
/// segments. Children keep first-seen source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorNode {
    pub declarations: Vec<Declaration>,
    pub children: IndexMap<String, SelectorNode>,
}

impl SelectorNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a direct child by its selector segment.
    pub fn get(&self, segment: &str) -> Option<&SelectorNode> {
        self.children.get(segment)
    }

    /// True when the node carries no declarations and no children.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.children.is_empty()
    }
}

/// Builds the selector tree for a flat stylesheet.
///
/// Each rule's selector is split on whitespace and walked segment by
/// segment, creating nodes on demand; the rule's declarations land on the
/// final segment's node. Rules that repeat a selector merge: their
/// declarations append in source order, duplicates included.
pub fn build_tree(sheet: &Stylesheet) -> SelectorNode {
    let mut root = SelectorNode::new();
    for rule in sheet {
        let mut node = &mut root;
        for segment in rule.selector.split_whitespace() {
            node = node
                .children
                .entry(segment.to_string())
                .or_insert_with(SelectorNode::new);
        }
        node.declarations.extend(rule.declarations.iter().cloned());
    }
    root
}
