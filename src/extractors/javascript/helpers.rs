/// Shared helpers for the JavaScript/TypeScript adapters
use crate::extractors::base::BaseExtractor;
use regex::Regex;
use std::sync::LazyLock;
use tree_sitter::Node;

static CONSTANT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("static constant name regex"));

/// What encloses the node being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Module,
    Class,
    Function,
}

/// JSDoc/TSDoc blocks only; plain `//` and `/* */` comments are not docs
pub(crate) fn is_jsdoc(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed.starts_with("/**") && !trimmed.starts_with("/**/")
}

pub(crate) fn find_doc_comment(base: &BaseExtractor, node: &Node) -> Option<String> {
    base.find_doc_comment(node, is_jsdoc)
}

pub(crate) fn is_constant_name(name: &str) -> bool {
    CONSTANT_NAME_RE.is_match(name)
}

pub(crate) fn name_or_default(base: &BaseExtractor, node: &Node, field: &str) -> String {
    base.field_text(node, field)
        .unwrap_or_else(|| "default".to_string())
}
