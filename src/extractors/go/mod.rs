mod functions;
mod helpers;
mod specs;

use crate::extractors::base::{BaseExtractor, Declaration, DeclarationParser};
use helpers::Scope;
use tree_sitter::{Node, Tree};

/// Go declaration adapter that handles:
/// - The package clause
/// - Structs, interfaces, and named types
/// - Functions and methods with receivers
/// - Struct fields and interface methods
/// - Package-level constants
pub struct GoExtractor {
    base: BaseExtractor,
}

impl GoExtractor {
    pub fn new(base: BaseExtractor) -> Self {
        Self { base }
    }

    fn walk_tree(&self, node: Node, depth: u32, scope: Scope, declarations: &mut Vec<Declaration>) {
        if !node.is_named() || !self.base.accepts(&node) {
            return;
        }
        let base = &self.base;

        match node.kind() {
            "package_clause" => {
                declarations.push(specs::extract_package(base, node, depth));
            }
            "type_spec" | "type_alias" => {
                declarations.push(specs::extract_type_spec(base, node, depth));
                self.walk_children(node, depth + 1, Scope::Type, declarations);
            }
            "function_declaration" | "method_declaration" => {
                // Local types and closures inside bodies are not part of the outline
                declarations.push(functions::extract_function(base, node, depth));
            }
            "field_declaration" if scope == Scope::Type => {
                declarations.push(specs::extract_field(base, node, depth));
                // Anonymous struct types nest their own fields
                self.walk_children(node, depth + 1, Scope::Type, declarations);
            }
            "method_elem" if scope == Scope::Type => {
                declarations.push(functions::extract_method_elem(base, node, depth));
            }
            "const_spec" if scope == Scope::Package => {
                declarations.push(specs::extract_constant(base, node, depth));
            }
            "comment" | "interpreted_string_literal" | "raw_string_literal"
            | "function_literal" | "import_declaration" => {}
            _ => self.walk_children(node, depth, scope, declarations),
        }
    }

    fn walk_children(
        &self,
        node: Node,
        depth: u32,
        scope: Scope,
        declarations: &mut Vec<Declaration>,
    ) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk_tree(child, depth, scope, declarations);
        }
    }
}

impl DeclarationParser for GoExtractor {
    fn extract_declarations(&mut self, tree: &Tree) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        self.walk_tree(tree.root_node(), 0, Scope::Package, &mut declarations);
        declarations
    }
}
