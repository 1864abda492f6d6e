/// Rust type-level declarations
/// - Structs, enums, unions, traits, impl blocks, type aliases
/// - Modules
/// - Fields and enum variants
/// - Constants and statics
use super::helpers::{find_doc_comment, struct_like_header};
use super::RustExtractor;
use crate::extractors::base::{Declaration, DeclarationKind};
use tree_sitter::Node;

/// Extract struct, enum, union, trait or type alias
pub(super) fn extract_type(extractor: &RustExtractor, node: Node, depth: u32) -> Declaration {
    let base = extractor.base();
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());

    let signature = match node.kind() {
        "struct_item" | "union_item" => struct_like_header(base, &node),
        "type_item" => base.header_text(&node, &[]),
        _ => base.header_text(&node, &["body"]),
    };
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Class, &signature, depth, doc)
}

/// Extract an impl block; its name is the implementing type
pub(super) fn extract_impl(extractor: &RustExtractor, node: Node, depth: u32) -> Declaration {
    let base = extractor.base();
    let name = base
        .field_text(&node, "type")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = base.header_text(&node, &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Class, &signature, depth, doc)
}

/// Extract a module, inline or out-of-line
pub(super) fn extract_module(extractor: &RustExtractor, node: Node, depth: u32) -> Declaration {
    let base = extractor.base();
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = base.header_text(&node, &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Module, &signature, depth, doc)
}

/// Extract a named struct field or an enum variant
pub(super) fn extract_field(extractor: &RustExtractor, node: Node, depth: u32) -> Declaration {
    let base = extractor.base();
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = if node.kind() == "enum_variant" {
        struct_like_header(base, &node)
    } else {
        base.header_text(&node, &[])
    };
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Field, &signature, depth, doc)
}

/// Extract a const or static item; the value is not part of the signature
pub(super) fn extract_constant(extractor: &RustExtractor, node: Node, depth: u32) -> Declaration {
    let base = extractor.base();
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = base.header_text(&node, &["value"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Constant, &signature, depth, doc)
}
