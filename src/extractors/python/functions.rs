/// Function and method extraction
use super::helpers::Scope;
use super::types::extract_docstring;
use super::PythonExtractor;
use crate::extractors::base::{Declaration, DeclarationKind};
use tree_sitter::Node;

/// Extract a function definition; functions directly inside a class body are methods
pub(super) fn extract_function(
    extractor: &PythonExtractor,
    node: Node,
    depth: u32,
    scope: Scope,
) -> Declaration {
    let base = extractor.base();
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());

    let kind = if scope == Scope::Class {
        DeclarationKind::Method
    } else {
        DeclarationKind::Function
    };

    let signature = base.header_text(&node, &["body"]);
    let doc = extract_docstring(extractor, &node);

    base.create_declaration(&node, name, kind, &signature, depth, doc)
}
