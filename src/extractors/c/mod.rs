//! C language declaration adapter
//!
//! Outlines function definitions and prototypes, structs, unions, enums,
//! typedefs, struct fields, enumerators and preprocessor macros. This module is
//! organized into focused submodules:
//!
//! - `helpers` - Declarator navigation and doc comment lookup
//! - `items` - Extraction of each declaration kind

use crate::extractors::base::{BaseExtractor, Declaration, DeclarationParser};
use helpers::Scope;
use tree_sitter::{Node, Tree};

mod helpers;
mod items;

pub struct CExtractor {
    base: BaseExtractor,
}

impl CExtractor {
    pub fn new(base: BaseExtractor) -> Self {
        Self { base }
    }

    fn walk_tree(&self, node: Node, depth: u32, scope: Scope, declarations: &mut Vec<Declaration>) {
        if !node.is_named() || !self.base.accepts(&node) {
            return;
        }
        let base = &self.base;

        match node.kind() {
            "function_definition" => {
                declarations.push(items::extract_function(base, node, depth));
            }
            "declaration" if scope == Scope::File && helpers::declares_function(node) => {
                declarations.push(items::extract_function(base, node, depth));
            }
            "type_definition" => {
                declarations.push(items::extract_typedef(base, node, depth));
                if let Some(body) = node
                    .child_by_field_name("type")
                    .and_then(|ty| ty.child_by_field_name("body"))
                {
                    self.walk_children(body, depth + 1, Scope::Type, declarations);
                }
            }
            "struct_specifier" | "union_specifier" | "enum_specifier" => {
                let Some(body) = node.child_by_field_name("body") else {
                    return;
                };
                if node.child_by_field_name("name").is_some() {
                    declarations.push(items::extract_aggregate(base, node, depth));
                    self.walk_children(body, depth + 1, Scope::Type, declarations);
                } else {
                    self.walk_children(body, depth, Scope::Type, declarations);
                }
            }
            "field_declaration" if scope == Scope::Type => {
                declarations.push(items::extract_field(base, node, depth));
                self.walk_children(node, depth + 1, Scope::Type, declarations);
            }
            "enumerator" => {
                declarations.push(items::extract_enumerator(base, node, depth));
            }
            "preproc_def" | "preproc_function_def" if scope == Scope::File => {
                declarations.push(items::extract_macro(base, node, depth));
            }
            "comment" | "string_literal" | "preproc_include" | "compound_statement" => {}
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

impl DeclarationParser for CExtractor {
    fn extract_declarations(&mut self, tree: &Tree) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        self.walk_tree(tree.root_node(), 0, Scope::File, &mut declarations);
        declarations
    }
}

#[cfg(test)]
mod tests {
    use crate::extractors::base::DeclarationKind;
    use crate::extractors::test_support::outline_of;
    use crate::language::LanguageTag;

    #[test]
    fn test_functions_prototypes_and_macros() {
        let code = r#"#include <stdio.h>

#define MAX_NAME 64
#define SQUARE(x) ((x) * (x))

/* Adds two integers. */
int add(int a, int b);

static char *
dup_name(const char *name)
{
    return NULL;
}

int (*handler)(int);
"#;
        let decls = outline_of(LanguageTag::C, code).declarations;
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.kind, d.signature.as_str(), d.name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DeclarationKind::Constant, "#define MAX_NAME", "MAX_NAME"),
                (DeclarationKind::Function, "#define SQUARE(x)", "SQUARE"),
                (DeclarationKind::Function, "int add(int a, int b)", "add"),
                (
                    DeclarationKind::Function,
                    "static char * dup_name(const char *name)",
                    "dup_name"
                ),
            ]
        );
        assert_eq!(decls[2].doc_first_line.as_deref(), Some("Adds two integers."));
    }

    #[test]
    fn test_structs_typedefs_and_enums() {
        let code = r#"struct point {
    int x;
    int y;
};

typedef struct {
    char name[32];
    struct point origin;
} Shape;

enum color { RED, GREEN = 2 };

typedef unsigned long size_type;
"#;
        let decls = outline_of(LanguageTag::C, code).declarations;
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.kind, d.signature.as_str(), d.depth))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DeclarationKind::Class, "struct point", 0),
                (DeclarationKind::Field, "int x", 1),
                (DeclarationKind::Field, "int y", 1),
                (DeclarationKind::Class, "typedef struct Shape", 0),
                (DeclarationKind::Field, "char name[32]", 1),
                (DeclarationKind::Field, "struct point origin", 1),
                (DeclarationKind::Class, "enum color", 0),
                (DeclarationKind::Constant, "RED", 1),
                (DeclarationKind::Constant, "GREEN", 1),
                (DeclarationKind::Class, "typedef unsigned long size_type", 0),
            ]
        );
        assert_eq!(decls[3].name, "Shape");
        assert_eq!(decls[4].name, "name");
    }

    #[test]
    fn test_include_guard_survives_a_fault() {
        let code = "#ifndef SHAPES_H\n#define SHAPES_H\n\nint area(int w, int h);\n\nint twice(int x) {\n    return x * 2\n}\n\n#endif\n";
        let outcome = outline_of(LanguageTag::C, code);
        assert!(outcome.is_partial());
        let names: Vec<_> = outcome
            .declarations
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        // The fault sits in the body of `twice`, so its header is still usable
        assert_eq!(names, vec!["SHAPES_H", "area", "twice"]);
    }
}
