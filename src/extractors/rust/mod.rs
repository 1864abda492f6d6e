/// Rust declaration adapter with support for:
/// - Structs, enums, unions, traits, type aliases
/// - Impl blocks (methods nest under the impl)
/// - Functions, extern signatures, `macro_rules!`
/// - Modules, constants, statics
/// - Struct fields and enum variants
use crate::extractors::base::{BaseExtractor, Declaration, DeclarationParser};
use tree_sitter::{Node, Tree};

// Private modules
mod functions;
mod helpers;
mod types;

use self::helpers::Scope;

pub struct RustExtractor {
    base: BaseExtractor,
}

impl RustExtractor {
    pub fn new(base: BaseExtractor) -> Self {
        Self { base }
    }

    fn walk_tree(&self, node: Node, depth: u32, scope: Scope, declarations: &mut Vec<Declaration>) {
        if !node.is_named() || !self.base.accepts(&node) {
            return;
        }

        let nested_scope = match node.kind() {
            "mod_item" => {
                declarations.push(types::extract_module(self, node, depth));
                Some(Scope::Item)
            }
            "struct_item" | "enum_item" | "union_item" | "type_item" => {
                declarations.push(types::extract_type(self, node, depth));
                Some(Scope::Item)
            }
            "trait_item" => {
                declarations.push(types::extract_type(self, node, depth));
                Some(Scope::Trait)
            }
            "impl_item" => {
                declarations.push(types::extract_impl(self, node, depth));
                Some(Scope::Impl)
            }
            "function_item" | "function_signature_item" => {
                declarations.push(functions::extract_function(self, node, depth, scope));
                Some(Scope::Function)
            }
            "macro_definition" => {
                declarations.push(functions::extract_macro(self, node, depth));
                return;
            }
            "field_declaration" | "enum_variant" => {
                declarations.push(types::extract_field(self, node, depth));
                Some(Scope::Item)
            }
            "const_item" | "static_item" => {
                declarations.push(types::extract_constant(self, node, depth));
                return;
            }
            "attribute_item" | "inner_attribute_item" | "line_comment" | "block_comment"
            | "string_literal" | "raw_string_literal" | "macro_invocation" | "use_declaration" => {
                return;
            }
            _ => None,
        };

        let (child_depth, child_scope) = match nested_scope {
            Some(inner) => (depth + 1, inner),
            None => (depth, scope),
        };

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk_tree(child, child_depth, child_scope, declarations);
        }
    }

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }
}

impl DeclarationParser for RustExtractor {
    fn extract_declarations(&mut self, tree: &Tree) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        self.walk_tree(tree.root_node(), 0, Scope::Item, &mut declarations);
        declarations
    }
}

#[cfg(test)]
mod tests {
    use crate::extractors::base::DeclarationKind;
    use crate::extractors::test_support::outline_of;
    use crate::language::LanguageTag;

    #[test]
    fn test_structs_impls_and_methods() {
        let code = r#"
/// A 2D point.
#[derive(Debug, Clone)]
pub struct Point {
    /// Horizontal axis
    pub x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}
"#;
        let decls = outline_of(LanguageTag::Rust, code).declarations;
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.kind, d.signature.as_str(), d.depth))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DeclarationKind::Class, "pub struct Point", 0),
                (DeclarationKind::Field, "pub x: f64", 1),
                (DeclarationKind::Field, "y: f64", 1),
                (DeclarationKind::Class, "impl Point", 0),
                (DeclarationKind::Method, "pub fn new(x: f64, y: f64) -> Self", 1),
                (DeclarationKind::Method, "fn norm(&self) -> f64", 1),
            ]
        );
        assert_eq!(decls[0].doc_first_line.as_deref(), Some("A 2D point."));
        assert_eq!(decls[1].doc_first_line.as_deref(), Some("Horizontal axis"));
        assert_eq!(decls[3].name, "Point");
    }

    #[test]
    fn test_traits_enums_and_constants() {
        let code = r#"
pub const MAX_DEPTH: usize = 64;
static GREETING: &str = "fn fake() {}";

pub enum Shape {
    Circle(f64),
    Rect { w: f64, h: f64 },
}

pub trait Area: Sized {
    fn area(&self) -> f64;
    fn describe(&self) -> String {
        String::new()
    }
}

impl Area for Shape {
    fn area(&self) -> f64 {
        0.0
    }
}
"#;
        let decls = outline_of(LanguageTag::Rust, code).declarations;
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.kind, d.signature.as_str(), d.depth))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DeclarationKind::Constant, "pub const MAX_DEPTH: usize", 0),
                (DeclarationKind::Constant, "static GREETING: &str", 0),
                (DeclarationKind::Class, "pub enum Shape", 0),
                (DeclarationKind::Field, "Circle(f64)", 1),
                (DeclarationKind::Field, "Rect", 1),
                (DeclarationKind::Field, "w: f64", 2),
                (DeclarationKind::Field, "h: f64", 2),
                (DeclarationKind::Class, "pub trait Area: Sized", 0),
                (DeclarationKind::Method, "fn area(&self) -> f64", 1),
                (DeclarationKind::Method, "fn describe(&self) -> String", 1),
                (DeclarationKind::Class, "impl Area for Shape", 0),
                (DeclarationKind::Method, "fn area(&self) -> f64", 1),
            ]
        );
    }

    #[test]
    fn test_modules_and_free_functions() {
        let code = "mod inner {\n    pub fn helper() {}\n}\n\nmod external;\n\nmacro_rules! square {\n    ($x:expr) => { $x * $x };\n}\n";
        let decls = outline_of(LanguageTag::Rust, code).declarations;
        let summary: Vec<_> = decls
            .iter()
            .map(|d| (d.kind, d.signature.as_str(), d.depth))
            .collect();
        assert_eq!(
            summary,
            vec![
                (DeclarationKind::Module, "mod inner", 0),
                (DeclarationKind::Function, "pub fn helper()", 1),
                (DeclarationKind::Module, "mod external", 0),
                (DeclarationKind::Function, "macro_rules! square", 0),
            ]
        );
    }

    #[test]
    fn test_multiline_signature_collapses() {
        let code = "pub fn configure(\n    name: &str,\n    retries: u32,\n) -> Result<(), Error>\nwhere\n    Error: Send,\n{\n    Ok(())\n}\n";
        let decls = outline_of(LanguageTag::Rust, code).declarations;
        assert_eq!(
            decls[0].signature,
            "pub fn configure( name: &str, retries: u32, ) -> Result<(), Error> where Error: Send,"
        );
    }

    #[test]
    fn test_plain_comments_are_not_docs() {
        let code = "// just a note\nfn quiet() {}\n";
        let decls = outline_of(LanguageTag::Rust, code).declarations;
        assert_eq!(decls[0].doc_first_line, None);
    }
}
