//! TypeScript and TSX declaration adapter
//!
//! Both grammars share the JavaScript node kinds, so this adapter reuses the
//! JavaScript walker in its TypeScript dialect and adds interfaces, type aliases,
//! enums, namespaces and member signatures through [`interfaces`].

pub(crate) mod interfaces;

use crate::extractors::base::{BaseExtractor, Declaration, DeclarationParser};
use crate::extractors::javascript::{Dialect, JavaScriptExtractor};
use tree_sitter::Tree;

pub struct TypeScriptExtractor {
    inner: JavaScriptExtractor,
}

impl TypeScriptExtractor {
    pub fn new(base: BaseExtractor) -> Self {
        Self {
            inner: JavaScriptExtractor::with_dialect(base, Dialect::TypeScript),
        }
    }
}

impl DeclarationParser for TypeScriptExtractor {
    fn extract_declarations(&mut self, tree: &Tree) -> Vec<Declaration> {
        self.inner.extract_declarations(tree)
    }
}
