/// Class and class field extraction for JavaScript-family languages
use super::helpers::{find_doc_comment, name_or_default};
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

/// `class Foo extends Bar`; TS abstract classes share the shape
pub(crate) fn extract_class(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    let name = name_or_default(base, &node, "name");
    let signature = base.header_text(&node, &["body"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Class, &signature, depth, doc)
}

/// Class expression bound to a name (`const Widget = class`) or default-exported
/// (`export default class`). Class expressions anywhere else are not declarations.
pub(crate) fn extract_class_expression(
    base: &BaseExtractor,
    node: Node,
    depth: u32,
) -> Option<Declaration> {
    let parent = node.parent()?;
    let header = base.header_text(&node, &["body"]);
    let (name, signature, doc) = match parent.kind() {
        "variable_declarator" => {
            let name_node = parent
                .child_by_field_name("name")
                .filter(|name_node| name_node.kind() == "identifier")?;
            let name = base.get_node_text(&name_node);
            let binding = parent.parent()?;
            let keyword = binding
                .child(0)
                .map(|first| base.get_node_text(&first))
                .unwrap_or_default();
            let signature = format!("{} {} = {}", keyword, name, header);
            (name, signature, find_doc_comment(base, &binding))
        }
        "export_statement" => (
            name_or_default(base, &node, "name"),
            header,
            find_doc_comment(base, &node),
        ),
        _ => return None,
    };

    Some(base.create_declaration(&node, name, DeclarationKind::Class, &signature, depth, doc))
}

/// Class field; the initializer is not part of the signature
pub(crate) fn extract_field(base: &BaseExtractor, node: Node, depth: u32) -> Declaration {
    // JS names the field `property`, TS `name`
    let name = base
        .field_text(&node, "property")
        .or_else(|| base.field_text(&node, "name"))
        .unwrap_or_else(|| "anonymous".to_string());
    let signature = base.header_text(&node, &["value"]);
    let doc = find_doc_comment(base, &node);

    base.create_declaration(&node, name, DeclarationKind::Field, &signature, depth, doc)
}
