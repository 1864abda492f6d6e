/// Shared helpers for the Ruby adapter
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// What encloses the node being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scope {
    TopLevel,
    Namespace,
    Method,
}

/// `#` line comments directly above; `=begin` blocks count as well
pub(super) fn find_doc_comment(base: &BaseExtractor, node: &Node) -> Option<String> {
    base.find_doc_comment(node, |text| {
        let trimmed = text.trim_start();
        trimmed.starts_with('#') || trimmed.starts_with("=begin")
    })
}

/// Children that close a header when the declaration has no body
const HEADER_FIELDS: &[&str] = &["name", "parameters", "superclass", "value"];

/// Declaration header from the AST: everything before the body or a trailing
/// comment, so parameter lists may span lines and `;` inside strings is kept.
pub(super) fn header_signature(base: &BaseExtractor, node: &Node) -> String {
    let body_start = node
        .child_by_field_name("body")
        .map(|body| body.start_byte());
    let mut cursor = node.walk();
    let comment_start = node
        .children(&mut cursor)
        .find(|child| child.kind() == "comment")
        .map(|comment| comment.start_byte());

    let end = match (body_start, comment_start) {
        (Some(body), Some(comment)) => body.min(comment),
        (Some(end), None) | (None, Some(end)) => end,
        (None, None) => HEADER_FIELDS
            .iter()
            .filter_map(|field| node.child_by_field_name(field))
            .map(|child| child.end_byte())
            .max()
            .unwrap_or_else(|| node.end_byte()),
    };
    base.header_span(node.start_byte(), end)
}
