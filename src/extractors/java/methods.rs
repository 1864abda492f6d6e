/// Method and constructor extraction
use super::helpers::{find_doc_comment, name_of, signature_start};
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

/// Methods, constructors and compact record constructors; abstract and interface
/// methods have no body and keep their whole text minus the `;`
pub(super) fn extract_method(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = name_of(base, &node);
    let signature = base.header_from(&node, signature_start(node), &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Method, &signature, depth, doc)
}
