//! JavaScript declaration adapter
//!
//! Walks the tree with a node-kind switch, the same way for plain JavaScript and
//! for the TypeScript dialects. TypeScript-only node kinds are delegated to
//! [`crate::extractors::typescript`].

mod functions;
pub(crate) mod helpers;
mod types;
mod variables;

use crate::extractors::base::{BaseExtractor, Declaration, DeclarationParser};
use crate::extractors::typescript::interfaces;
use helpers::Scope;
use tree_sitter::{Node, Tree};

/// Which grammar produced the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dialect {
    JavaScript,
    TypeScript,
}

pub struct JavaScriptExtractor {
    base: BaseExtractor,
    dialect: Dialect,
}

impl JavaScriptExtractor {
    pub fn new(base: BaseExtractor) -> Self {
        Self::with_dialect(base, Dialect::JavaScript)
    }

    pub(crate) fn with_dialect(base: BaseExtractor, dialect: Dialect) -> Self {
        Self { base, dialect }
    }

    /// Main tree traversal
    fn visit_node(
        &self,
        node: Node,
        depth: u32,
        scope: Scope,
        declarations: &mut Vec<Declaration>,
    ) {
        if !node.is_named() || !self.base.accepts(&node) {
            return;
        }
        let base = &self.base;

        let nested_scope = match node.kind() {
            "class_declaration" | "abstract_class_declaration" => {
                declarations.push(types::extract_class(base, node, depth));
                Some(Scope::Class)
            }
            "class" => types::extract_class_expression(base, node, depth).map(|declaration| {
                declarations.push(declaration);
                Scope::Class
            }),
            "function_declaration" | "generator_function_declaration" | "function_signature" => {
                declarations.push(functions::extract_function(base, node, depth));
                Some(Scope::Function)
            }
            "method_definition" if scope == Scope::Class => {
                declarations.push(functions::extract_method(base, node, depth));
                Some(Scope::Function)
            }
            "field_definition" | "public_field_definition" if scope == Scope::Class => {
                declarations.push(types::extract_field(base, node, depth));
                return;
            }
            "lexical_declaration" | "variable_declaration" if scope == Scope::Module => {
                let found = variables::extract_variables(base, node, depth);
                if found.is_empty() {
                    self.walk_children(node, depth, Scope::Function, declarations);
                } else {
                    declarations.extend(found);
                    self.walk_children(node, depth + 1, Scope::Function, declarations);
                }
                return;
            }
            "comment" | "string" | "template_string" | "regex" | "import_statement" => return,
            _ if self.dialect == Dialect::TypeScript => {
                match interfaces::extract_typescript_node(base, node, depth, scope) {
                    Some((declaration, Some(inner))) => {
                        declarations.push(declaration);
                        Some(inner)
                    }
                    Some((declaration, None)) => {
                        declarations.push(declaration);
                        return;
                    }
                    None => None,
                }
            }
            _ => None,
        };

        match nested_scope {
            Some(inner) => self.walk_children(node, depth + 1, inner, declarations),
            None => self.walk_children(node, depth, scope, declarations),
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
            self.visit_node(child, depth, scope, declarations);
        }
    }
}

impl DeclarationParser for JavaScriptExtractor {
    fn extract_declarations(&mut self, tree: &Tree) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        self.visit_node(tree.root_node(), 0, Scope::Module, &mut declarations);
        declarations
    }
}

#[cfg(test)]
mod tests {
    use crate::extractors::base::DeclarationKind;
    use crate::extractors::test_support::outline_of;
    use crate::language::LanguageTag;

    #[test]
    fn test_classes_methods_and_functions() {
        let code = r#"
/**
 * Keeps a running total.
 */
export class Counter extends Base {
  count = 0;

  /** Add to the total. */
  add(n) {
    this.count += n;
  }

  static create() {
    return new Counter();
  }
}

function helper(a, b) {
  return a + b;
}
"#;
        let decls = outline_of(LanguageTag::JavaScript, code).declarations;
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.kind, d.signature.as_str(), d.depth))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DeclarationKind::Class, "class Counter extends Base", 0),
                (DeclarationKind::Field, "count", 1),
                (DeclarationKind::Method, "add(n)", 1),
                (DeclarationKind::Method, "static create()", 1),
                (DeclarationKind::Function, "function helper(a, b)", 0),
            ]
        );
        assert_eq!(
            decls[0].doc_first_line.as_deref(),
            Some("Keeps a running total.")
        );
        assert_eq!(decls[2].doc_first_line.as_deref(), Some("Add to the total."));
    }

    #[test]
    fn test_top_level_bindings() {
        let code = "const MAX_ITEMS = 50;\nlet counter = 0;\nconst add = (a, b) => a + b;\nexport const load = async function (url) {\n  return fetch(url);\n};\n";
        let decls = outline_of(LanguageTag::JavaScript, code).declarations;
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.kind, d.signature.as_str(), d.name.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DeclarationKind::Constant, "const MAX_ITEMS", "MAX_ITEMS"),
                (DeclarationKind::Function, "const add = (a, b) =>", "add"),
                (DeclarationKind::Function, "const load = async function (url)", "load"),
            ]
        );
    }

    #[test]
    fn test_class_expressions() {
        let code = "/** Default widget. */\nexport default class {\n  run() {}\n}\n\nconst Widget = class extends Base {\n  draw() {}\n};\n\ncall(class {\n  ignored() {}\n});\n";
        let decls = outline_of(LanguageTag::JavaScript, code).declarations;
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.kind, d.name.as_str(), d.signature.as_str(), d.depth))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DeclarationKind::Class, "default", "class", 0),
                (DeclarationKind::Method, "run", "run()", 1),
                (DeclarationKind::Class, "Widget", "const Widget = class extends Base", 0),
                (DeclarationKind::Method, "draw", "draw()", 1),
            ]
        );
        assert_eq!(decls[0].doc_first_line.as_deref(), Some("Default widget."));
    }

    #[test]
    fn test_locals_and_strings_are_ignored() {
        let code = "function outer() {\n  const LOCAL = 1;\n  const s = `function fake() {}`;\n  function inner() {}\n}\n";
        let decls = outline_of(LanguageTag::JavaScript, code).declarations;
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.name.as_str(), d.depth))
            .collect();
        assert_eq!(summary, vec![("outer", 0), ("inner", 1)]);
    }
}
