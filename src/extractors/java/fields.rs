/// Field and constant extraction
use super::helpers::{extract_modifiers, find_doc_comment, signature_start};
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

/// `private int count` or, for `static final` fields, a constant.
///
/// The signature stops at the first initializer.
pub(super) fn extract_field(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let modifiers = extract_modifiers(base, node);
    let is_constant =
        modifiers.iter().any(|m| m == "static") && modifiers.iter().any(|m| m == "final");
    let kind = if is_constant {
        DeclarationKind::Constant
    } else {
        DeclarationKind::Field
    };

    let declarator = node.child_by_field_name("declarator");
    let name = declarator
        .and_then(|d| base.field_text(&d, "name"))
        .unwrap_or_else(|| "anonymous".to_string());
    let end = declarator
        .and_then(|d| d.child_by_field_name("value"))
        .map(|value| value.start_byte())
        .unwrap_or_else(|| node.end_byte());
    let signature = base.header_span(signature_start(node), end);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, kind, &signature, depth, doc)
}
