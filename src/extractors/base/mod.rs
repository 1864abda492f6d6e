// Base Extractor Types and Traits
//
// - types.rs: Declaration, SourceUnit, OutlineRecord, ParseOutcome
// - extractor.rs: BaseExtractor implementation (text, signatures, doc comments)
// - tree_methods.rs: Fault location and tree navigation helpers

pub mod extractor;
pub mod tree_methods;
pub mod types;

use tree_sitter::Tree;

// Re-export key types for external use
pub use extractor::{normalize_line, BaseExtractor, DEFAULT_MAX_SIGNATURE_WIDTH, ELLIPSIS};
pub use tree_methods::{locate_fault, FaultPoint};
pub use types::{
    Declaration, DeclarationKind, Diagnostic, OutlineRecord, ParseOutcome, SourceUnit,
};

/// The single capability every language adapter provides.
///
/// Implementations walk a parsed tree and return declarations in document order.
/// Depth must be the number of enclosing declarations. Nodes rejected by
/// [`BaseExtractor::accepts`] (at or after the first syntax fault) must not produce
/// declarations.
pub trait DeclarationParser {
    fn extract_declarations(&mut self, tree: &Tree) -> Vec<Declaration>;
}
