//! Outline text rendering
//!
//! ```text
//! src/shapes.py
//! class class Circle:  // A round shape.
//!   method def area(self):
//! ```
//!
//! The first line is the path. Every declaration gets one line: the indent unit
//! repeated `depth` times, the kind marker, the signature, and optionally the
//! first doc line. Each line ends with `\n`.

use crate::config::OutlineConfig;
use crate::extractors::base::Declaration;
use std::fmt::Write;

/// Separator between a signature and its doc line
const DOC_SEPARATOR: &str = "  // ";

#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    indent_unit: String,
    include_doc_comments: bool,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self::from_config(&OutlineConfig::default())
    }
}

impl OutlineFormatter {
    pub fn new(indent_unit: impl Into<String>, include_doc_comments: bool) -> Self {
        Self {
            indent_unit: indent_unit.into(),
            include_doc_comments,
        }
    }

    pub fn from_config(config: &OutlineConfig) -> Self {
        Self::new(config.indent_unit.clone(), config.include_doc_comments)
    }

    /// Render `declarations` for `path`. An empty list renders as the empty string.
    pub fn format(&self, path: &str, declarations: &[Declaration]) -> String {
        if declarations.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(path.len() + declarations.len() * 48);
        out.push_str(path);
        out.push('\n');

        for declaration in declarations {
            for _ in 0..declaration.depth {
                out.push_str(&self.indent_unit);
            }
            // Writing to a String cannot fail
            let _ = write!(out, "{} {}", declaration.kind.marker(), declaration.signature);
            if self.include_doc_comments {
                if let Some(doc) = &declaration.doc_first_line {
                    out.push_str(DOC_SEPARATOR);
                    out.push_str(doc);
                }
            }
            out.push('\n');
        }

        out
    }
}
