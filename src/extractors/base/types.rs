// Base Extractor Types
//
// Data structures shared by every language adapter, the formatter and the engine.

use crate::utils::token_estimation::TokenEstimator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Module,
    Class,
    Function,
    Method,
    Field,
    Constant,
}

impl DeclarationKind {
    /// Fixed marker rendered in front of the signature
    pub fn marker(&self) -> &'static str {
        match self {
            DeclarationKind::Module => "mod",
            DeclarationKind::Class => "class",
            DeclarationKind::Function => "fn",
            DeclarationKind::Method => "method",
            DeclarationKind::Field => "field",
            DeclarationKind::Constant => "const",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclarationKind::Module => "module",
            DeclarationKind::Class => "class",
            DeclarationKind::Function => "function",
            DeclarationKind::Method => "method",
            DeclarationKind::Field => "field",
            DeclarationKind::Constant => "constant",
        };
        f.write_str(name)
    }
}

/// A named construct anchoring one outline entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Declared name as it appears in code
    pub name: String,
    /// Single-line, width-limited signature without the body
    pub signature: String,
    /// Start line number (1-based)
    pub start_line: u32,
    /// End line number (1-based)
    pub end_line: u32,
    /// Lexical nesting depth among declarations (0 = top-level)
    pub depth: u32,
    /// First line of the attached doc comment, if any
    pub doc_first_line: Option<String>,
}

/// One file to summarize: relative path plus its already-read content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub path: String,
    pub content: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

impl<P: Into<String>, C: Into<String>> From<(P, C)> for SourceUnit {
    fn from((path, content): (P, C)) -> Self {
        Self::new(path, content)
    }
}

/// Rendered outline for one supported-language input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineRecord {
    pub path: String,
    /// Outline text; empty when nothing was extracted
    pub text: String,
}

impl OutlineRecord {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn empty(path: impl Into<String>) -> Self {
        Self::new(path, String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Rough token cost of embedding this outline in a prompt
    pub fn estimated_tokens(&self) -> usize {
        TokenEstimator::new().estimate_string_hybrid(&self.text)
    }
}

/// Note attached to a partial parse: where the source stopped being well-formed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// 1-based line of the first syntax fault
    pub line: u32,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Best-effort declaration list plus an optional note about malformed input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub declarations: Vec<Declaration>,
    pub diagnostic: Option<Diagnostic>,
}

impl ParseOutcome {
    pub fn is_partial(&self) -> bool {
        self.diagnostic.is_some()
    }
}
