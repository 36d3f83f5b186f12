//! Common-value extraction.
//!
//! Scans a flat stylesheet for declaration values worth naming and assigns
//! each distinct literal a LESS variable. Three categories are recognized:
//!
//! - **color**: the value is entirely a hex color (`#RGB` or `#RRGGBB`) or
//!   an `rgb()`/`rgba()` call
//! - **font-size**: the property is exactly `font-size`
//! - **spacing**: the property is exactly `padding` or `margin` and the
//!   value is entirely an unsigned pixel length
//!
//! A value embedded in a larger expression (`1px solid #333`) is never
//! extracted; classification looks at the whole value string only. Variables
//! are named `@<category>-<n>` with `n` counting up from 1 per category in
//! first-seen order, and the same literal always maps to the same variable.
//!
//! ```
//! use lessen::{parser::parse, variables::extract_variables};
//!
//! let sheet = parse(".a { color: #333; } .b { background: #333; margin: 8px; }");
//! let vars = extract_variables(&sheet);
//! let names: Vec<&str> = vars.iter().map(|v| v.name.as_str()).collect();
//! assert_eq!(names, vec!["@color-1", "@spacing-1"]);
//! ```

use std::fmt;

use indexmap::IndexMap;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while_m_n},
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize},
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use crate::parser::{Declaration, Stylesheet};

/// The kind of value a variable stands for. Doubles as the name stem:
/// `Category::FontSize` displays as `font-size`, giving `@font-size-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Color,
    FontSize,
    Spacing,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Color => "color",
            Category::FontSize => "font-size",
            Category::Spacing => "spacing",
        })
    }
}

/// A named extraction: `name` carries the `@` prefix, `value` is the exact
/// source literal it replaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: String,
    pub category: Category,
}

/// All variables extracted from one stylesheet, keyed by source literal
/// within each category.
///
/// Buckets stay private so the `@<category>-<n>` numbering cannot drift
/// from insertion order. Iteration yields colors, then font sizes, then
/// spacings, each in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableSet {
    colors: IndexMap<String, Variable>,
    font_sizes: IndexMap<String, Variable>,
    spacings: IndexMap<String, Variable>,
}

impl VariableSet {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.colors.len() + self.font_sizes.len() + self.spacings.len()
    }

    /// Iterates every variable, grouped by category in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.colors
            .values()
            .chain(self.font_sizes.values())
            .chain(self.spacings.values())
    }

    /// Returns the variable standing for a declaration's value, if the
    /// declaration classifies and its exact literal was extracted.
    pub fn substitute(&self, declaration: &Declaration) -> Option<&Variable> {
        let category = classify(&declaration.property, &declaration.value)?;
        self.bucket(category).get(&declaration.value)
    }

    fn bucket(&self, category: Category) -> &IndexMap<String, Variable> {
        match category {
            Category::Color => &self.colors,
            Category::FontSize => &self.font_sizes,
            Category::Spacing => &self.spacings,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut IndexMap<String, Variable> {
        match category {
            Category::Color => &mut self.colors,
            Category::FontSize => &mut self.font_sizes,
            Category::Spacing => &mut self.spacings,
        }
    }

    fn add(&mut self, category: Category, value: &str) {
        let bucket = self.bucket_mut(category);
        if bucket.contains_key(value) {
            return;
        }
        let name = format!("@{}-{}", category, bucket.len() + 1);
        log::trace!("extracted {name} = {value}");
        bucket.insert(
            value.to_string(),
            Variable {
                name,
                value: value.to_string(),
                category,
            },
        );
    }
}

/// Walks every declaration in source order and collects one [`Variable`]
/// per distinct extractable literal.
pub fn extract_variables(sheet: &Stylesheet) -> VariableSet {
    let mut set = VariableSet::default();
    for rule in sheet {
        for declaration in &rule.declarations {
            if let Some(category) = classify(&declaration.property, &declaration.value) {
                set.add(category, &declaration.value);
            }
        }
    }
    set
}

/// Classifies one declaration. Color is checked first, so a color literal
/// wins no matter which property carries it.
pub fn classify(property: &str, value: &str) -> Option<Category> {
    if is_color_value(value) {
        return Some(Category::Color);
    }
    if property == "font-size" {
        return Some(Category::FontSize);
    }
    if is_spacing_property(property) && is_px_length(value) {
        return Some(Category::Spacing);
    }
    None
}

/// Shorthand `padding`/`margin` only; the per-side longhands stay literal.
fn is_spacing_property(property: &str) -> bool {
    matches!(property, "padding" | "margin")
}

fn is_color_value(value: &str) -> bool {
    all_consuming(alt((hex_color, rgb_function)))(value).is_ok()
}

fn is_px_length(value: &str) -> bool {
    all_consuming(px_length)(value).is_ok()
}

/// `#` followed by exactly six or exactly three hex digits. The six-digit
/// form is tried first so `#333333` is not cut short at three.
fn hex_color(input: &str) -> IResult<&str, &str> {
    preceded(
        char('#'),
        alt((
            take_while_m_n(6, 6, |c: char| c.is_ascii_hexdigit()),
            take_while_m_n(3, 3, |c: char| c.is_ascii_hexdigit()),
        )),
    )(input)
}

/// `rgb(...)` or `rgba(...)`. The arguments are not validated; naming a
/// color does not require understanding its channels.
fn rgb_function(input: &str) -> IResult<&str, &str> {
    delimited(
        pair(alt((tag("rgba"), tag("rgb"))), char('(')),
        take_while(|c| c != ')'),
        char(')'),
    )(input)
}

/// An unsigned integer or decimal immediately followed by `px`.
fn px_length(input: &str) -> IResult<&str, &str> {
    terminated(
        recognize(pair(digit1, opt(preceded(char('.'), digit1)))),
        tag("px"),
    )(input)
}
