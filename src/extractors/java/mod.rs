/// Java declaration adapter
///
/// This module is organized into focused sub-modules:
/// - helpers: Shared utility functions (modifiers, annotations, javadoc)
/// - classes: Class, interface, enum, record and package extraction
/// - methods: Method and constructor extraction
/// - fields: Field and constant extraction
mod classes;
mod fields;
mod helpers;
mod methods;

use crate::extractors::base::{BaseExtractor, Declaration, DeclarationParser};
use helpers::Scope;
use tree_sitter::{Node, Tree};

pub struct JavaExtractor {
    base: BaseExtractor,
}

impl JavaExtractor {
    pub fn new(base: BaseExtractor) -> Self {
        Self { base }
    }

    fn walk_tree(&self, node: Node, depth: u32, scope: Scope, declarations: &mut Vec<Declaration>) {
        if !node.is_named() || !self.base.accepts(&node) {
            return;
        }
        let base = &self.base;

        match node.kind() {
            "package_declaration" => {
                declarations.push(classes::extract_package(base, node, depth));
            }
            "class_declaration"
            | "interface_declaration"
            | "enum_declaration"
            | "record_declaration"
            | "annotation_type_declaration" => {
                declarations.push(classes::extract_type(base, node, depth));
                self.walk_children(node, depth + 1, Scope::Class, declarations);
            }
            "method_declaration" | "constructor_declaration" | "compact_constructor_declaration"
                if scope == Scope::Class =>
            {
                // Local and anonymous classes inside bodies stay out of the outline
                declarations.push(methods::extract_method(base, node, depth));
            }
            "field_declaration" | "constant_declaration" if scope == Scope::Class => {
                declarations.push(fields::extract_field(base, node, depth));
            }
            "line_comment" | "block_comment" | "string_literal" | "text_block"
            | "import_declaration" => {}
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

impl DeclarationParser for JavaExtractor {
    fn extract_declarations(&mut self, tree: &Tree) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        self.walk_tree(tree.root_node(), 0, Scope::File, &mut declarations);
        declarations
    }
}
