//! Integration tests for LESS rendering.
//!
//! Tests the output stage:
//! - Block layout, indentation and blank-line separation
//! - Variable preamble placement and ordering
//! - Substitution during emission
//! - Purity of rendering

use lessen::nest::build_tree;
use lessen::parser::parse;
use lessen::render::render;
use lessen::variables::extract_variables;

fn render_basic(css: &str) -> String {
    render(&build_tree(&parse(css)), None)
}

fn render_with_variables(css: &str) -> String {
    let sheet = parse(css);
    let vars = extract_variables(&sheet);
    render(&build_tree(&sheet), Some(&vars))
}

// ============================================================================
// BLOCK LAYOUT
// ============================================================================

#[test]
fn test_single_block_layout() {
    assert_eq!(
        render_basic(".a { color: red; }"),
        ".a {\n  color: red;\n}\n\n"
    );
}

#[test]
fn test_sibling_blocks_separated_by_blank_line() {
    assert_eq!(
        render_basic(".a { x: 1; }\n.b { y: 2; }"),
        ".a {\n  x: 1;\n}\n\n.b {\n  y: 2;\n}\n\n"
    );
}

#[test]
fn test_nested_block_layout() {
    assert_eq!(
        render_basic(".header { color: #333; }\n.header h1 { font-size: 24px; }"),
        ".header {\n  color: #333;\n  h1 {\n    font-size: 24px;\n  }\n\n}\n\n"
    );
}

#[test]
fn test_indent_grows_two_spaces_per_level() {
    assert_eq!(
        render_basic(".a .b .c { x: 1; }"),
        ".a {\n  .b {\n    .c {\n      x: 1;\n    }\n\n  }\n\n}\n\n"
    );
}

#[test]
fn test_declarations_precede_child_blocks() {
    let out = render_basic(".a h1 { margin: 0; }\n.a { color: red; }");
    assert_eq!(
        out,
        ".a {\n  color: red;\n  h1 {\n    margin: 0;\n  }\n\n}\n\n"
    );
}

#[test]
fn test_merged_rules_render_as_one_block() {
    assert_eq!(
        render_basic(".a { color: red; }\n.a { margin: 0; }"),
        ".a {\n  color: red;\n  margin: 0;\n}\n\n"
    );
}

#[test]
fn test_empty_stylesheet_renders_empty_string() {
    assert_eq!(render_basic(""), "");
}

// ============================================================================
// VARIABLE PREAMBLE
// ============================================================================

#[test]
fn test_preamble_layout() {
    let out = render_with_variables(".a { margin: 4px; color: #333; font-size: 12px; }");
    assert_eq!(
        out,
        "// Variables\n\
         @color-1: #333;\n\
         @font-size-1: 12px;\n\
         @spacing-1: 4px;\n\
         \n\
         .a {\n  margin: @spacing-1;\n  color: @color-1;\n  font-size: @font-size-1;\n}\n\n"
    );
}

#[test]
fn test_preamble_orders_by_category_then_sequence() {
    let out = render_with_variables(
        ".a { padding: 8px; color: #111; }\n.b { color: #222; font-size: 10px; }",
    );
    let preamble_end = out.find("\n\n").unwrap();
    assert_eq!(
        &out[..preamble_end],
        "// Variables\n@color-1: #111;\n@color-2: #222;\n@font-size-1: 10px;\n@spacing-1: 8px;"
    );
}

#[test]
fn test_preamble_omitted_when_nothing_matched() {
    assert_eq!(
        render_with_variables(".a { display: flex; }"),
        ".a {\n  display: flex;\n}\n\n"
    );
}

// ============================================================================
// SUBSTITUTION
// ============================================================================

#[test]
fn test_substituted_and_literal_values_mix() {
    let out = render_with_variables(".a { color: #333; border: 1px solid #333; width: 50%; }");
    assert!(out.contains("  color: @color-1;\n"));
    assert!(out.contains("  border: 1px solid #333;\n"));
    assert!(out.contains("  width: 50%;\n"));
}

#[test]
fn test_substitution_reaches_nested_blocks() {
    let out = render_with_variables(".a { color: #333; }\n.a h1 { color: #333; }");
    assert!(out.contains("  color: @color-1;\n"));
    assert!(out.contains("    color: @color-1;\n"));
    assert_eq!(out.matches("color: @color-1;").count(), 2);
}

#[test]
fn test_render_without_set_keeps_literals() {
    let out = render_basic(".a { color: #333; font-size: 24px; }");
    assert!(out.contains("color: #333;"));
    assert!(out.contains("font-size: 24px;"));
    assert!(!out.contains('@'));
}

// ============================================================================
// PURITY
// ============================================================================

#[test]
fn test_rendering_twice_is_byte_identical() {
    let sheet = parse(".a { color: #333; }\n.a h1 { font-size: 24px; }\n.b { margin: 8px; }");
    let tree = build_tree(&sheet);
    assert_eq!(render(&tree, None), render(&tree, None));

    let vars = extract_variables(&sheet);
    assert_eq!(render(&tree, Some(&vars)), render(&tree, Some(&vars)));
}

#[test]
fn test_values_pass_through_verbatim() {
    let out = render_basic(".a { FONT-FAMILY: \"Comic Sans MS\",   cursive; }");
    assert!(out.contains("FONT-FAMILY: \"Comic Sans MS\",   cursive;"));
}
