/// Top-level `const`/`let`/`var` declarations
///
/// Function-valued declarators become functions (`const add = (a, b) =>`);
/// UPPER_CASE `const` bindings become constants. Class-valued bindings are left
/// to the walker. Everything else is skipped.
use super::helpers::{find_doc_comment, is_constant_name};
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationKind};
use tree_sitter::Node;

const FUNCTION_VALUES: &[&str] = &[
    "arrow_function",
    "function_expression",
    "function",
    "generator_function",
];

pub(crate) fn extract_variables(base: &BaseExtractor, node: Node, depth: u32) -> Vec<Declaration> {
    let keyword = node
        .child(0)
        .map(|first| base.get_node_text(&first))
        .unwrap_or_default();

    let mut declarations = Vec::new();
    let mut cursor = node.walk();
    for declarator in node.children(&mut cursor) {
        if declarator.kind() != "variable_declarator" || !base.accepts(&declarator) {
            continue;
        }
        let Some(name_node) = declarator.child_by_field_name("name") else {
            continue;
        };
        if name_node.kind() != "identifier" {
            continue;
        }
        let name = base.get_node_text(&name_node);
        let value = declarator.child_by_field_name("value");

        let declaration = match value {
            // Class expressions are declared by the walker when it reaches them
            Some(value) if value.kind() == "class" => continue,
            Some(value) if FUNCTION_VALUES.contains(&value.kind()) => {
                if !base.accepts(&value) {
                    continue;
                }
                let value_header = base.header_text(&value, &["body"]);
                let signature = format!("{} {} = {}", keyword, name, value_header);
                let doc = find_doc_comment(base, &node);
                base.create_declaration(
                    &declarator,
                    name,
                    DeclarationKind::Function,
                    &signature,
                    depth,
                    doc,
                )
            }
            _ if keyword == "const" && is_constant_name(&name) => {
                let header = base.header_text(&declarator, &["value"]);
                let signature = format!("{} {}", keyword, header);
                let doc = find_doc_comment(base, &node);
                base.create_declaration(
                    &declarator,
                    name,
                    DeclarationKind::Constant,
                    &signature,
                    depth,
                    doc,
                )
            }
            _ => continue,
        };
        declarations.push(declaration);
    }

    declarations
}
