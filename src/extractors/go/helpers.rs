/// Shared helpers for the Go adapter
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// What encloses the node being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scope {
    Package,
    Type,
}

/// Grouping nodes whose comment documents a single spec: `type Foo struct` sits
/// inside a `type_declaration`, and the comment is that declaration's sibling.
const SPEC_GROUPS: &[&str] = &["type_declaration", "const_declaration"];

/// Any `//` or `/* */` block directly above the node; Go has no special doc marker
pub(super) fn find_doc_comment(base: &BaseExtractor, node: &Node) -> Option<String> {
    let is_doc = |_: &str| true;
    base.find_doc_comment(node, is_doc).or_else(|| {
        let parent = node.parent()?;
        if SPEC_GROUPS.contains(&parent.kind()) && is_sole_spec(&parent) {
            base.find_doc_comment(&parent, is_doc)
        } else {
            None
        }
    })
}

/// `type Foo struct {}` rather than a parenthesized `type ( ... )` group
fn is_sole_spec(group: &Node) -> bool {
    let mut cursor = group.walk();
    let found = !group.children(&mut cursor).any(|child| child.kind() == "(");
    found
}
