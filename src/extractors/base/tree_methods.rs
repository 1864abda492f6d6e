// Tree navigation methods for BaseExtractor
//
// Fault location for partial parses plus small child lookups shared by the
// language adapters.

use super::extractor::BaseExtractor;
use tree_sitter::{Node, Tree};

/// Position of the first syntax fault in a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultPoint {
    pub byte: usize,
    /// 0-based row
    pub row: usize,
}

/// Locate the first syntax fault in document order, if the tree has any.
///
/// The fault is the earliest MISSING node or the earliest stray token inside an
/// ERROR node. Complete, error-free subtrees that tree-sitter folded into an ERROR
/// node during recovery are not faults; declarations inside them stay usable.
pub fn locate_fault(tree: &Tree) -> Option<FaultPoint> {
    let root = tree.root_node();
    if !root.has_error() {
        return None;
    }
    first_fault(root).or(Some(FaultPoint {
        byte: root.start_byte(),
        row: root.start_position().row,
    }))
}

fn first_fault(node: Node) -> Option<FaultPoint> {
    if node.is_missing() {
        return Some(point(&node));
    }
    if !node.has_error() {
        return None;
    }

    let is_error = node.is_error();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(fault) = first_fault(child) {
            return Some(fault);
        }
        if is_error && !is_complete_subtree(&child) {
            return Some(point(&child));
        }
    }

    // ERROR node made only of complete subtrees, or an error flag with no culprit
    // among the children
    Some(point(&node))
}

/// A named, error-free node with structure of its own
fn is_complete_subtree(node: &Node) -> bool {
    (node.is_named() && !node.has_error() && node.child_count() > 0)
        || node.kind().contains("comment")
}

fn point(node: &Node) -> FaultPoint {
    FaultPoint {
        byte: node.start_byte(),
        row: node.start_position().row,
    }
}

impl BaseExtractor {
    /// Find first child by type
    pub fn find_child_by_type<'a>(&self, node: &Node<'a>, child_type: &str) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| child.kind() == child_type);
        found
    }

    /// Find child by multiple types
    pub fn find_child_by_types<'a>(&self, node: &Node<'a>, types: &[&str]) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| types.contains(&child.kind()));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_python(code: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_clean_tree_has_no_fault() {
        let tree = parse_python("def foo():\n    return 1\n");
        assert_eq!(locate_fault(&tree), None);
    }

    #[test]
    fn test_fault_follows_valid_prefix() {
        let code = "def ok():\n    pass\n\ndef broken(:\n    pass\n";
        let tree = parse_python(code);
        let fault = locate_fault(&tree).expect("broken source should report a fault");
        // Fault is somewhere after the first, complete function
        assert!(fault.row >= 3, "fault reported too early: {:?}", fault);
        assert!(fault.byte > code.find("pass").unwrap());
    }
}
