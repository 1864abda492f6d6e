/// Module, class and method declarations for Ruby
use super::helpers::{find_doc_comment, header_signature, Scope};
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

/// `module Foo`, `class Foo < Bar`, `class << self`
pub(super) fn extract_namespace(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let kind = if node.kind() == "module" {
        DeclarationKind::Module
    } else {
        DeclarationKind::Class
    };
    let name = base
        .field_text(&node, "name")
        .or_else(|| base.field_text(&node, "value"))
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = header_signature(base, &node);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, kind, &signature, depth, doc)
}

/// `def name(args)` and `def self.name(args)`; a method when inside a class or
/// module, a function at top level
pub(super) fn extract_method(
    base: &BaseExtractor,
    node: Node,
    depth: u32,
    scope: Scope,
) -> Declaration {
    let kind = if scope == Scope::Namespace {
        DeclarationKind::Method
    } else {
        DeclarationKind::Function
    };
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = header_signature(base, &node);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, kind, &signature, depth, doc)
}

/// `MAX_SIZE = 10`, `Config::DEFAULT = {}`; only the target is kept
pub(super) fn extract_constant(
    base: &BaseExtractor,
    node: Node,
    depth: u32,
) -> Option<Declaration> {
    let left = node.child_by_field_name("left")?;
    let name = match left.kind() {
        "constant" => base.get_node_text(&left),
        "scope_resolution" => base.field_text(&left, "name")?,
        _ => return None,
    };
    let signature = base.get_node_text(&left);
    let doc = find_doc_comment(base, &node);

    Some(base.create_declaration(
        &node,
        name,
        DeclarationKind::Constant,
        &signature,
        depth,
        doc,
    ))
}
