//! Routing for declaration extraction - delegates to language-specific adapters

use crate::extractors::base::{BaseExtractor, Declaration, DeclarationParser};
use crate::language::LanguageTag;
use tree_sitter::Tree;

/// Route declaration extraction to the adapter for `base.language`
pub(crate) fn extract_declarations_for_language(
    base: BaseExtractor,
    tree: &Tree,
) -> Vec<Declaration> {
    match base.language {
        LanguageTag::Python => {
            crate::extractors::python::PythonExtractor::new(base).extract_declarations(tree)
        }
        LanguageTag::Rust => {
            crate::extractors::rust::RustExtractor::new(base).extract_declarations(tree)
        }
        LanguageTag::JavaScript => {
            crate::extractors::javascript::JavaScriptExtractor::new(base).extract_declarations(tree)
        }
        LanguageTag::TypeScript | LanguageTag::Tsx => {
            crate::extractors::typescript::TypeScriptExtractor::new(base).extract_declarations(tree)
        }
        LanguageTag::Go => crate::extractors::go::GoExtractor::new(base).extract_declarations(tree),
        LanguageTag::Java => {
            crate::extractors::java::JavaExtractor::new(base).extract_declarations(tree)
        }
        LanguageTag::C => crate::extractors::c::CExtractor::new(base).extract_declarations(tree),
        LanguageTag::Ruby => {
            crate::extractors::ruby::RubyExtractor::new(base).extract_declarations(tree)
        }
    }
}
