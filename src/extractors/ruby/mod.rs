/// Ruby declaration adapter with support for:
/// - Modules, classes, singleton classes
/// - Methods and singleton methods
/// - Constant assignments
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationParser};
use tree_sitter::{Node, Tree};

// Private modules
mod helpers;
mod signatures;

use helpers::Scope;

pub struct RubyExtractor {
    base: BaseExtractor,
}

impl RubyExtractor {
    pub fn new(base: BaseExtractor) -> Self {
        Self { base }
    }

    fn walk_tree(&self, node: Node, depth: u32, scope: Scope, declarations: &mut Vec<Declaration>) {
        // `class` and `module` keyword tokens share their kind with the declarations
        if !node.is_named() || !self.base.accepts(&node) {
            return;
        }
        let base = &self.base;

        match node.kind() {
            "module" | "class" | "singleton_class" => {
                declarations.push(signatures::extract_namespace(base, node, depth));
                self.walk_children(node, depth + 1, Scope::Namespace, declarations);
            }
            "method" | "singleton_method" => {
                declarations.push(signatures::extract_method(base, node, depth, scope));
                self.walk_children(node, depth + 1, Scope::Method, declarations);
            }
            "assignment" if scope != Scope::Method => {
                if let Some(declaration) = signatures::extract_constant(base, node, depth) {
                    declarations.push(declaration);
                }
            }
            "comment" | "string" | "heredoc_body" | "string_array" | "symbol_array" => {}
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

impl DeclarationParser for RubyExtractor {
    fn extract_declarations(&mut self, tree: &Tree) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        self.walk_tree(tree.root_node(), 0, Scope::TopLevel, &mut declarations);
        declarations
    }
}
