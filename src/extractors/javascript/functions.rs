/// Function and method extraction for JavaScript-family languages
use super::helpers::{find_doc_comment, name_or_default};
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

/// `function foo(a, b)`, `async function* gen()`, and TS `function f(x: T): U;`
pub(crate) fn extract_function(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = name_or_default(base, &node, "name");
    let signature = base.header_text(&node, &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Function, &signature, depth, doc)
}

/// Class methods, including getters, setters, static and async methods
pub(crate) fn extract_method(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = name_or_default(base, &node, "name");
    let signature = base.header_text(&node, &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Method, &signature, depth, doc)
}
