/// Rust function, method and macro extraction
use super::helpers::{find_doc_comment, Scope};
use super::RustExtractor;
use crate::extractors::base::{Declaration, DeclarationKind};
use tree_sitter::Node;

/// Extract a function item or a body-less signature item (trait methods, extern fns)
pub(super) fn extract_function(
    extractor: &RustExtractor,
    node: Node,
    depth: u32,
    scope: Scope,
) -> Declaration {
    let base = extractor.base();
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());

    let kind = if scope.holds_methods() {
        DeclarationKind::Method
    } else {
        DeclarationKind::Function
    };

    let signature = base.header_text(&node, &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, kind, &signature, depth, doc)
}

/// Extract a `macro_rules!` definition
pub(super) fn extract_macro(extractor: &RustExtractor, node: Node, depth: u32) -> Declaration {
    let base = extractor.base();
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = format!("macro_rules! {}", name);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Function, &signature, depth, doc)
}
