/// Helper utilities for the Rust adapter
/// - Scope tracking (impl/trait bodies turn functions into methods)
/// - Doc comment detection
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// What encloses the node being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scope {
    Item,
    Impl,
    Trait,
    Function,
}

impl Scope {
    pub(super) fn holds_methods(&self) -> bool {
        matches!(self, Scope::Impl | Scope::Trait)
    }
}

/// Outer doc comments only: `///` and `/** */`. `//!` and plain `//` are not docs.
pub(super) fn is_outer_doc(text: &str) -> bool {
    let trimmed = text.trim_start();
    (trimmed.starts_with("///") && !trimmed.starts_with("////"))
        || (trimmed.starts_with("/**") && !trimmed.starts_with("/**/"))
}

pub(super) fn find_doc_comment(base: &BaseExtractor, node: &Node) -> Option<String> {
    base.find_doc_comment(node, is_outer_doc)
}

/// Header for struct-like items: brace bodies are cut, tuple bodies are kept
pub(super) fn struct_like_header(base: &BaseExtractor, node: &Node) -> String {
    match node.child_by_field_name("body") {
        Some(body) if body.kind() == "field_declaration_list" => {
            base.header_text(node, &["body"])
        }
        _ => base.header_text(node, &[]),
    }
}
