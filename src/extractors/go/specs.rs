/// Type specs, struct fields and constants for Go
use super::helpers::find_doc_comment;
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

/// `type Point struct`, `type Shape interface`, `type Celsius float64`, `type Alias = T`
pub(super) fn extract_type_spec(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let text = base.get_node_text(&node);
    let head = text.split('{').next().unwrap_or_default();
    let signature = format!("type {}", head);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Class, &signature, depth, doc)
}

/// Struct field, possibly naming several identifiers or embedding a type
pub(super) fn extract_field(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = base
        .field_text(&node, "name")
        .or_else(|| base.field_text(&node, "type"))
        .unwrap_or_else(|| base.get_node_text(&node));
    let signature = base.get_node_text(&node);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Field, &signature, depth, doc)
}

/// Package-level `const` spec; the value is not part of the signature
pub(super) fn extract_constant(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = format!("const {}", base.header_text(&node, &["value"]));
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Constant, &signature, depth, doc)
}

/// `package main`
pub(super) fn extract_package(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = base
        .find_child_by_type(&node, "package_identifier")
        .map(|ident| base.get_node_text(&ident))
        .unwrap_or_default();
    let signature = base.get_node_text(&node);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Module, &signature, depth, doc)
}
