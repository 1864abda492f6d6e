/// Helper utilities for Python declaration extraction
use regex::Regex;
use std::sync::LazyLock;

static CONSTANT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^_*[A-Z][A-Z0-9_]*$").expect("static constant name regex"));

/// What encloses the node being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Module,
    Class,
    Function,
}

/// Module-level names written in UPPER_CASE are treated as constants
pub(crate) fn is_constant_name(name: &str) -> bool {
    CONSTANT_NAME_RE.is_match(name)
}
