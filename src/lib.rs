// Outline Core - tree-sitter declaration outlines for LLM context
//
// Turns in-memory (path, content) pairs into compact, deterministic outlines of
// each file's declarations: signatures and first doc lines, no bodies. The crate
// performs no I/O; callers supply content and embed the outline text verbatim.
//
// Flow: LanguageRegistry -> ExtractorManager (per-language adapters) ->
// OutlineFormatter -> OutlineEngine (ordered batch, worker pool).

pub mod config;
pub mod error;
pub mod extractors;
pub mod language;
pub mod outline;
pub mod utils;

pub use config::OutlineConfig;
pub use error::{OutlineError, Result};
pub use extractors::{
    Declaration, DeclarationKind, DeclarationParser, Diagnostic, ExtractorManager, OutlineRecord,
    ParseOutcome, SourceUnit,
};
pub use language::{LanguageRegistry, LanguageTag};
pub use outline::{CancellationToken, OutlineCache, OutlineEngine, OutlineFormatter};
pub use utils::TokenEstimator;

/// Outline a batch with the default configuration and built-in languages
pub fn outline_batch(units: &[SourceUnit]) -> Result<Vec<OutlineRecord>> {
    let config = OutlineConfig::default();
    let registry = config.registry();
    OutlineEngine::new(config, &registry)?.run(units)
}
