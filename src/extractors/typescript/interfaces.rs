//! Interface, type alias, enum and namespace extraction
//!
//! TypeScript-only node kinds. Everything the JavaScript grammar shares
//! (classes, functions, methods) is handled by the JavaScript walker.

use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use crate::extractors::javascript::helpers::{find_doc_comment, name_or_default, Scope};
use tree_sitter::Node;

/// Extract a TypeScript-only declaration.
///
/// Returns the declaration plus the scope its children are visited in, or `None`
/// as the scope when the node's children hold nothing worth outlining.
pub(crate) fn extract_typescript_node(
    base: &BaseExtractor,
    node: Node,
    depth: u32,
    scope: Scope,
) -> Option<(Declaration, Option<Scope>)> {
    let found = match node.kind() {
        "interface_declaration" => (
            declaration(base, node, depth, DeclarationKind::Class, &["body"]),
            Some(Scope::Class),
        ),
        "type_alias_declaration" => (
            declaration(base, node, depth, DeclarationKind::Class, &["value"]),
            None,
        ),
        "enum_declaration" => (
            declaration(base, node, depth, DeclarationKind::Class, &["body"]),
            None,
        ),
        // The bare `module` keyword token shares this kind
        "internal_module" | "module" if node.is_named() => (
            declaration(base, node, depth, DeclarationKind::Module, &["body"]),
            Some(Scope::Module),
        ),
        "method_signature" | "abstract_method_signature" if scope == Scope::Class => (
            declaration(base, node, depth, DeclarationKind::Method, &[]),
            None,
        ),
        "property_signature" if scope == Scope::Class => (
            declaration(base, node, depth, DeclarationKind::Field, &[]),
            None,
        ),
        _ => return None,
    };
    Some(found)
}

fn declaration(
    base: &BaseExtractor,
    node: Node,
    depth: u32,
    kind: DeclarationKind,
    stop_fields: &[&str],
) -> Declaration {
    let name = name_or_default(base, &node, "name");
    let signature = base.header_text(&node, stop_fields);
    let doc = find_doc_comment(base, &node);
    base.create_declaration(&node, name, kind, &signature, depth, doc)
}
