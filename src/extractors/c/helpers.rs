//! Helper methods for declarator navigation and doc lookup
//!
//! C buries names inside nested declarators (`*(*f)(int)`), so names and
//! function-ness are found by following the `declarator` chain.

use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// What encloses the node being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scope {
    File,
    Type,
}

const NAME_KINDS: &[&str] = &["identifier", "field_identifier", "type_identifier"];

/// Follow the declarator chain down to the declared identifier
pub(super) fn declarator_name(base: &BaseExtractor, node: Node) -> Option<String> {
    let mut current = node;
    loop {
        if NAME_KINDS.contains(&current.kind()) {
            return Some(base.get_node_text(&current));
        }
        current = match current.child_by_field_name("declarator") {
            Some(inner) => inner,
            // parenthesized_declarator has no field names
            None => current.named_child(0)?,
        };
    }
}

/// Whether the declarator chain of a declaration declares a function
pub(super) fn declares_function(node: Node) -> bool {
    let mut current = node.child_by_field_name("declarator");
    while let Some(declarator) = current {
        match declarator.kind() {
            // `int (*handler)(int)` is a function pointer variable, not a prototype
            "function_declarator" => {
                return declarator
                    .child_by_field_name("declarator")
                    .is_some_and(|inner| inner.kind() != "parenthesized_declarator");
            }
            "init_declarator" => return false,
            _ => current = declarator.child_by_field_name("declarator"),
        }
    }
    false
}

/// Any comment block directly above the node
pub(super) fn find_doc_comment(base: &BaseExtractor, node: &Node) -> Option<String> {
    base.find_doc_comment(node, |_| true)
}
