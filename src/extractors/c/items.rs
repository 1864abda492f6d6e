//! Extraction of functions, prototypes, aggregates, typedefs, fields and macros

use super::helpers::{declarator_name, find_doc_comment};
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

fn name_or_anonymous(base: &BaseExtractor, node: Node) -> String {
    declarator_name(base, node).unwrap_or_else(|| "anonymous".to_string())
}

/// `int add(int a, int b)` from a definition, or a prototype ending in `;`
pub(super) fn extract_function(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = name_or_anonymous(base, node);
    let signature = base.header_text(&node, &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Function, &signature, depth, doc)
}

/// `struct point`, `union value`, `enum color` with a body
pub(super) fn extract_aggregate(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = base.header_text(&node, &["body"]);
    // The comment sits above the enclosing `struct point { ... };` declaration
    let doc = find_doc_comment(base, &node).or_else(|| {
        let parent = node.parent()?;
        (parent.kind() == "declaration").then(|| find_doc_comment(base, &parent))?
    });

    base.create_declaration(&node, name, DeclarationKind::Class, &signature, depth, doc)
}

/// `typedef struct { ... } Point;` renders as `typedef struct Point`
pub(super) fn extract_typedef(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = name_or_anonymous(base, node);
    let body = node
        .child_by_field_name("type")
        .and_then(|ty| ty.child_by_field_name("body"));
    let signature = match body {
        Some(body) => base.text_without(&node, &body),
        None => base.header_text(&node, &[]),
    };
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Class, &signature, depth, doc)
}

/// Struct or union member
pub(super) fn extract_field(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = name_or_anonymous(base, node);
    let signature = match node
        .child_by_field_name("type")
        .and_then(|ty| ty.child_by_field_name("body"))
    {
        Some(body) => base.text_without(&node, &body),
        None => base.header_text(&node, &[]),
    };
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Field, &signature, depth, doc)
}

/// `#define NAME value` keeps only `#define NAME`; function-like macros keep
/// their parameter list
pub(super) fn extract_macro(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let kind = if node.kind() == "preproc_function_def" {
        DeclarationKind::Function
    } else {
        DeclarationKind::Constant
    };
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = base.header_text(&node, &["value"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, kind, &signature, depth, doc)
}

/// Enum member; the explicit value is not part of the signature
pub(super) fn extract_enumerator(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = base.header_text(&node, &["value"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Constant, &signature, depth, doc)
}
