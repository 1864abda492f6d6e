//! ExtractorManager - Public API for declaration extraction
//!
//! Parses source text with the grammar for a language tag and delegates to the
//! language adapter through the routing layer. Syntax faults produce a partial
//! outcome with a diagnostic instead of an error.

use crate::error::{OutlineError, Result};
use crate::extractors::base::{locate_fault, BaseExtractor, Diagnostic, ParseOutcome};
use crate::language::LanguageTag;
use tracing::debug;
use tree_sitter::Parser;

/// Stateless entry point to every language adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractorManager {}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Languages with an adapter
    pub fn supported_languages(&self) -> &'static [LanguageTag] {
        &LanguageTag::ALL
    }

    /// Parse `text` as `language` and return its declarations in document order.
    ///
    /// Malformed input never fails: declarations before the first syntax fault are
    /// returned with a [`Diagnostic`] describing it. Errors are reserved for parser
    /// faults (grammar mismatch, no tree produced).
    pub fn parse_declarations(
        &self,
        language: LanguageTag,
        text: &str,
        max_signature_width: usize,
    ) -> Result<ParseOutcome> {
        let mut parser = Parser::new();
        parser
            .set_language(&language.tree_sitter_language())
            .map_err(|e| {
                OutlineError::parser_fault(
                    language,
                    format!("failed to set parser language: {}", e),
                )
            })?;

        let tree = parser
            .parse(text, None)
            .ok_or_else(|| OutlineError::parser_fault(language, "parser produced no tree"))?;

        let fault = locate_fault(&tree);
        let base = BaseExtractor::new(language, text.to_string(), max_signature_width)
            .with_fault_byte(fault.map(|f| f.byte));

        let mut declarations =
            super::routing_declarations::extract_declarations_for_language(base, &tree);
        // Adapters emit in walk order; a stable sort keeps siblings on one line in place
        declarations.sort_by_key(|d| d.start_line);

        let diagnostic = fault.map(|f| Diagnostic {
            line: (f.row + 1) as u32,
            message: format!(
                "syntax error; outline truncated to {} declarations",
                declarations.len()
            ),
        });

        debug!(
            "Extracted {} declarations from {} source{}",
            declarations.len(),
            language,
            if diagnostic.is_some() { " (partial)" } else { "" }
        );

        Ok(ParseOutcome {
            declarations,
            diagnostic,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::DEFAULT_MAX_SIGNATURE_WIDTH;

    #[test]
    fn test_supported_languages_cover_every_tag() {
        let manager = ExtractorManager::new();
        assert_eq!(manager.supported_languages().len(), LanguageTag::ALL.len());
    }

    #[test]
    fn test_every_language_parses_empty_text() {
        let manager = ExtractorManager::new();
        for tag in LanguageTag::ALL {
            let outcome = manager
                .parse_declarations(tag, "", DEFAULT_MAX_SIGNATURE_WIDTH)
                .unwrap();
            assert!(outcome.declarations.is_empty(), "{} produced declarations", tag);
            assert!(!outcome.is_partial(), "{} reported a fault", tag);
        }
    }

    #[test]
    fn test_declarations_are_sorted_by_line() {
        let manager = ExtractorManager::new();
        let code = "def a():\n    pass\n\nclass B:\n    def c(self):\n        pass\n\ndef d():\n    pass\n";
        let outcome = manager
            .parse_declarations(LanguageTag::Python, code, DEFAULT_MAX_SIGNATURE_WIDTH)
            .unwrap();
        let lines: Vec<_> = outcome.declarations.iter().map(|d| d.start_line).collect();
        assert_eq!(lines, vec![1, 4, 5, 8]);
    }

    #[test]
    fn test_broken_source_reports_diagnostic() {
        let manager = ExtractorManager::new();
        let code = "fn good() {}\n\nfn broken( {\n";
        let outcome = manager
            .parse_declarations(LanguageTag::Rust, code, DEFAULT_MAX_SIGNATURE_WIDTH)
            .unwrap();
        let diagnostic = outcome.diagnostic.expect("fault should be reported");
        assert!(diagnostic.line >= 3);
        assert_eq!(outcome.declarations[0].name, "good");
    }

    #[test]
    fn test_keyword_tokens_never_become_declarations() {
        let manager = ExtractorManager::new();
        let samples = [
            (LanguageTag::Ruby, "module M\n  class C\n    def m; end\n  end\nend\n"),
            (LanguageTag::TypeScript, "declare module \"x\" {\n  class C {}\n}\nenum E { A }\n"),
            (LanguageTag::JavaScript, "class D {}\nconst W = class {};\n"),
            (LanguageTag::Rust, "mod m {\n    struct S;\n    enum E { A }\n}\n"),
            (LanguageTag::Python, "class C:\n    def f(self):\n        pass\n"),
            (LanguageTag::Java, "package p;\nclass C { enum E { A } }\n"),
            (LanguageTag::C, "struct S { int x; };\nenum E { A };\n"),
            (LanguageTag::Go, "package p\n\ntype S struct{ X int }\n"),
        ];
        let keywords = ["class", "module", "mod", "struct", "enum", "package", "namespace"];
        for (tag, code) in samples {
            let outcome = manager
                .parse_declarations(tag, code, DEFAULT_MAX_SIGNATURE_WIDTH)
                .unwrap();
            assert!(!outcome.is_partial(), "{} sample did not parse", tag);
            for declaration in &outcome.declarations {
                assert!(
                    !keywords.contains(&declaration.signature.as_str()),
                    "{} emitted a bare keyword: {:?}",
                    tag,
                    declaration
                );
                assert_ne!(declaration.name, "anonymous", "{}: {:?}", tag, declaration);
            }
        }
    }

    #[test]
    fn test_signature_width_is_applied() {
        let manager = ExtractorManager::new();
        let code = "def handler(request, response, context, options, callbacks):\n    pass\n";
        let outcome = manager
            .parse_declarations(LanguageTag::Python, code, 20)
            .unwrap();
        let signature = &outcome.declarations[0].signature;
        assert_eq!(signature, "def handler(request,...");
        assert_eq!(signature.chars().count(), 23);
    }
}
