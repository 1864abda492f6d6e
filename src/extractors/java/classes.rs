/// Class, interface, enum, record, annotation type and package extraction
use super::helpers::{find_doc_comment, name_of, signature_start};
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

/// `public final class Foo<T> extends Bar implements Baz`
pub(super) fn extract_type(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = name_of(base, &node);
    let signature = base.header_from(&node, signature_start(node), &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Class, &signature, depth, doc)
}

/// `package com.example.app`
pub(super) fn extract_package(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = base
        .find_child_by_types(&node, &["scoped_identifier", "identifier"])
        .map(|ident| base.get_node_text(&ident))
        .unwrap_or_default();
    let signature = base.header_text(&node, &[]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Module, &signature, depth, doc)
}
