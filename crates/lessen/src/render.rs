//! LESS output rendering.
//!
//! Walks a [`SelectorNode`] tree depth-first and emits indented LESS text.
//! Values pass through verbatim except when a [`VariableSet`] is supplied
//! and holds a variable for the declaration's exact value, in which case the
//! variable name is emitted instead and the set's variables are listed in a
//! `// Variables` preamble.
//!
//! Rendering is a pure function of its inputs: the same tree and set always
//! produce byte-identical output.

use crate::nest::SelectorNode;
use crate::variables::VariableSet;

/// Renders the tree below `root` as LESS.
///
/// Each node becomes a `segment { ... }` block indented two spaces per
/// level, declarations before child blocks, with a blank line after every
/// closing brace. With `substitutions` present and non-empty, the
/// output opens with a `// Variables` preamble listing every variable in
/// category order (colors, font sizes, spacings).
pub fn render(root: &SelectorNode, substitutions: Option<&VariableSet>) -> String {
    let mut out = String::new();
    if let Some(vars) = substitutions {
        emit_preamble(&mut out, vars);
    }
    for (segment, node) in &root.children {
        emit_node(&mut out, segment, node, 0, substitutions);
    }
    out
}

fn emit_preamble(out: &mut String, vars: &VariableSet) {
    if vars.is_empty() {
        return;
    }
    out.push_str("// Variables\n");
    for var in vars.iter() {
        out.push_str(&format!("{}: {};\n", var.name, var.value));
    }
    out.push('\n');
}

fn emit_node(
    out: &mut String,
    segment: &str,
    node: &SelectorNode,
    depth: usize,
    substitutions: Option<&VariableSet>,
) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{indent}{segment} {{\n"));
    for declaration in &node.declarations {
        let value = substitutions
            .and_then(|vars| vars.substitute(declaration))
            .map(|var| var.name.as_str())
            .unwrap_or(&declaration.value);
        out.push_str(&format!("{indent}  {}: {value};\n", declaration.property));
    }
    for (child_segment, child) in &node.children {
        emit_node(out, child_segment, child, depth + 1, substitutions);
    }
    out.push_str(&format!("{indent}}}\n\n"));
}
