/// Class, field and constant extraction for Python
use super::helpers::{is_constant_name, Scope};
use super::PythonExtractor;
use crate::extractors::base::{Declaration, DeclarationKind};
use tree_sitter::Node;

/// Extract a class definition
pub(super) fn extract_class(extractor: &PythonExtractor, node: Node, depth: u32) -> Declaration {
    let base = extractor.base();
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = base.header_text(&node, &["body"]);
    let doc = extract_docstring(extractor, &node);

    base.create_declaration(&node, name, DeclarationKind::Class, &signature, depth, doc)
}

/// Extract a class field or module constant from an assignment.
///
/// Only simple `name = ...` / `name: T = ...` targets count. Assignments inside
/// functions are locals and never produce declarations.
pub(super) fn extract_assignment(
    extractor: &PythonExtractor,
    node: Node,
    depth: u32,
    scope: Scope,
) -> Option<Declaration> {
    let base = extractor.base();
    let left = node.child_by_field_name("left")?;
    if left.kind() != "identifier" {
        return None;
    }
    let name = base.get_node_text(&left);

    let kind = match scope {
        Scope::Class => DeclarationKind::Field,
        Scope::Module if is_constant_name(&name) => DeclarationKind::Constant,
        _ => return None,
    };

    let signature = base.header_text(&node, &["right"]);
    let doc = base.find_doc_comment(&statement_of(node), |text| text.starts_with('#'));

    Some(base.create_declaration(&node, name, kind, &signature, depth, doc))
}

/// Docstring of a function or class body, falling back to `#` comments above it
pub(super) fn extract_docstring(extractor: &PythonExtractor, node: &Node) -> Option<String> {
    let base = extractor.base();
    let docstring = node
        .child_by_field_name("body")
        .and_then(|body| body.named_child(0))
        .filter(|statement| statement.kind() == "expression_statement")
        .and_then(|statement| statement.named_child(0))
        .filter(|expr| expr.kind() == "string")
        .map(|string| base.get_node_text(&string));

    docstring.or_else(|| base.find_doc_comment(node, |text| text.starts_with('#')))
}

/// The statement wrapping an assignment, which is where comments are siblings
fn statement_of(node: Node) -> Node {
    match node.parent() {
        Some(parent) if parent.kind() == "expression_statement" => parent,
        _ => node,
    }
}
