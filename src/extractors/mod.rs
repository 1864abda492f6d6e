//! Language declaration adapters
//!
//! Each adapter walks a tree-sitter tree for one language and reports the
//! declarations an outline shows: modules, classes, functions, methods, fields and
//! constants.
//!
//! # Architecture
//!
//! - `base` - Declaration types, the `DeclarationParser` trait and shared text helpers
//! - `manager.rs` - ExtractorManager public API (parse, locate faults, sort)
//! - `routing_declarations.rs` - Static dispatch from `LanguageTag` to adapter (private)
//! - Language modules (python, rust, javascript, typescript, go, java, c, ruby)

pub mod base;
pub mod manager;
mod routing_declarations;

pub mod c;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod ruby;
pub mod rust;
pub mod typescript;

// Re-export the public API
pub use base::{
    Declaration, DeclarationKind, DeclarationParser, Diagnostic, OutlineRecord, ParseOutcome,
    SourceUnit,
};
pub use manager::ExtractorManager;
