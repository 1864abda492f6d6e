/// Python declaration adapter
///
/// - types: class, field and module constant extraction, docstrings
/// - functions: function and method extraction
/// - helpers: scope tracking and string utilities
pub(crate) mod functions;
pub(crate) mod helpers;
pub(crate) mod types;

use crate::extractors::base::{BaseExtractor, Declaration, DeclarationParser};
use helpers::Scope;
use tree_sitter::{Node, Tree};

pub struct PythonExtractor {
    base: BaseExtractor,
}

impl PythonExtractor {
    pub fn new(base: BaseExtractor) -> Self {
        Self { base }
    }

    fn walk_tree(&self, node: Node, depth: u32, scope: Scope, declarations: &mut Vec<Declaration>) {
        if !node.is_named() || !self.base.accepts(&node) {
            return;
        }

        match node.kind() {
            "class_definition" => {
                declarations.push(types::extract_class(self, node, depth));
                self.walk_children(node, depth + 1, Scope::Class, declarations);
            }
            "function_definition" => {
                declarations.push(functions::extract_function(self, node, depth, scope));
                self.walk_children(node, depth + 1, Scope::Function, declarations);
            }
            "assignment" => {
                // Nested `a = b = 1` chains are covered by the outer assignment
                if let Some(declaration) = types::extract_assignment(self, node, depth, scope) {
                    declarations.push(declaration);
                }
            }
            "lambda" | "string" | "comment" => {}
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

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}

impl DeclarationParser for PythonExtractor {
    fn extract_declarations(&mut self, tree: &Tree) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        self.walk_tree(tree.root_node(), 0, Scope::Module, &mut declarations);
        declarations
    }
}
