/// Function, method and interface method extraction for Go
use super::helpers::find_doc_comment;
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

/// `func Name(args) result` and `func (r *Recv) Name(args) result`
pub(super) fn extract_function(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let kind = if node.kind() == "method_declaration" {
        DeclarationKind::Method
    } else {
        DeclarationKind::Function
    };
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = base.header_text(&node, &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, kind, &signature, depth, doc)
}

/// Method listed in an interface body: `Area() float64`
pub(super) fn extract_method_elem(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = base
        .field_text(&node, "name")
        .unwrap_or_else(|| base.first_line(&node));
    let signature = base.get_node_text(&node);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Method, &signature, depth, doc)
}
