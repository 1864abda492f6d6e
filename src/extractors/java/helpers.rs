/// Helper functions for Java extraction
/// Handles modifiers, annotation skipping, and javadoc lookup
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// What encloses the node being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scope {
    File,
    Class,
}

const ANNOTATION_KINDS: &[&str] = &["annotation", "marker_annotation"];

/// Extract the keyword modifiers of a node (public, static, final, ...)
pub(super) fn extract_modifiers(base: &BaseExtractor, node: Node) -> Vec<String> {
    node.children(&mut node.walk())
        .find(|c| c.kind() == "modifiers")
        .map(|modifiers_node| {
            modifiers_node
                .children(&mut modifiers_node.walk())
                .filter(|c| !ANNOTATION_KINDS.contains(&c.kind()))
                .map(|c| base.get_node_text(&c))
                .collect()
        })
        .unwrap_or_default()
}

/// Byte where the signature starts: just past the last leading annotation
pub(super) fn signature_start(node: Node) -> usize {
    node.children(&mut node.walk())
        .find(|c| c.kind() == "modifiers")
        .and_then(|modifiers_node| {
            modifiers_node
                .children(&mut modifiers_node.walk())
                .filter(|c| ANNOTATION_KINDS.contains(&c.kind()))
                .map(|c| c.end_byte())
                .max()
        })
        .unwrap_or_else(|| node.start_byte())
}

pub(super) fn is_javadoc(text: &str) -> bool {
    text.trim_start().starts_with("/**")
}

pub(super) fn find_doc_comment(base: &BaseExtractor, node: &Node) -> Option<String> {
    base.find_doc_comment(node, is_javadoc)
}

pub(super) fn name_of(base: &BaseExtractor, node: &Node) -> String {
    base.field_text(node, "name")
        .unwrap_or_else(|| "anonymous".to_string())
}
