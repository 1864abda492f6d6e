//! Language Support - tags, grammars and the extension registry
//!
//! ALL language-specific tree-sitter configuration lives here. The registry maps
//! filename suffixes to a [`LanguageTag`]; it is built once and passed by reference,
//! never mutated afterwards.

use crate::error::OutlineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of languages that have a declaration adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Python,
    Rust,
    JavaScript,
    TypeScript,
    Tsx,
    Go,
    Java,
    C,
    Ruby,
}

impl LanguageTag {
    pub const ALL: [LanguageTag; 9] = [
        LanguageTag::Python,
        LanguageTag::Rust,
        LanguageTag::JavaScript,
        LanguageTag::TypeScript,
        LanguageTag::Tsx,
        LanguageTag::Go,
        LanguageTag::Java,
        LanguageTag::C,
        LanguageTag::Ruby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageTag::Python => "python",
            LanguageTag::Rust => "rust",
            LanguageTag::JavaScript => "javascript",
            LanguageTag::TypeScript => "typescript",
            LanguageTag::Tsx => "tsx",
            LanguageTag::Go => "go",
            LanguageTag::Java => "java",
            LanguageTag::C => "c",
            LanguageTag::Ruby => "ruby",
        }
    }

    /// Get the tree-sitter grammar for this tag
    ///
    /// This is the SINGLE SOURCE OF TRUTH for grammar selection.
    pub fn tree_sitter_language(&self) -> tree_sitter::Language {
        match self {
            LanguageTag::Python => tree_sitter_python::LANGUAGE.into(),
            LanguageTag::Rust => tree_sitter_rust::LANGUAGE.into(),
            LanguageTag::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            LanguageTag::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            LanguageTag::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            LanguageTag::Go => tree_sitter_go::LANGUAGE.into(),
            LanguageTag::Java => tree_sitter_java::LANGUAGE.into(),
            LanguageTag::C => tree_sitter_c::LANGUAGE.into(),
            LanguageTag::Ruby => tree_sitter_ruby::LANGUAGE.into(),
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageTag {
    type Err = OutlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        LanguageTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == lower)
            .ok_or_else(|| OutlineError::UnknownLanguage(s.to_string()))
    }
}

/// Built-in suffix table, in registration order.
const BUILTIN_EXTENSIONS: &[(&str, LanguageTag)] = &[
    (".py", LanguageTag::Python),
    (".pyi", LanguageTag::Python),
    (".rs", LanguageTag::Rust),
    (".js", LanguageTag::JavaScript),
    (".jsx", LanguageTag::JavaScript),
    (".mjs", LanguageTag::JavaScript),
    (".cjs", LanguageTag::JavaScript),
    (".ts", LanguageTag::TypeScript),
    (".mts", LanguageTag::TypeScript),
    (".cts", LanguageTag::TypeScript),
    (".tsx", LanguageTag::Tsx),
    (".go", LanguageTag::Go),
    (".java", LanguageTag::Java),
    (".c", LanguageTag::C),
    (".h", LanguageTag::C),
    (".rb", LanguageTag::Ruby),
];

/// Immutable suffix -> language mapping.
///
/// Matching is case-insensitive on the file name. When several entries match, the
/// one registered first wins.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    entries: Vec<(String, LanguageTag)>,
}

impl LanguageRegistry {
    /// An empty registry; nothing resolves until entries are added.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the built-in suffix table.
    pub fn builtin() -> Self {
        BUILTIN_EXTENSIONS
            .iter()
            .fold(Self::empty(), |registry, (ext, tag)| {
                registry.with_entry(ext, *tag)
            })
    }

    /// Registry with `overrides` registered ahead of the built-in table.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, LanguageTag)>,
    {
        let registry = overrides
            .into_iter()
            .fold(Self::empty(), |registry, (ext, tag)| {
                registry.with_entry(ext, tag)
            });
        BUILTIN_EXTENSIONS
            .iter()
            .fold(registry, |registry, (ext, tag)| registry.with_entry(ext, *tag))
    }

    /// Append an entry. Suffixes are stored lowercase with a leading dot.
    pub fn with_entry(mut self, extension: &str, tag: LanguageTag) -> Self {
        let ext = extension.trim().to_lowercase();
        if ext.is_empty() || ext == "." {
            return self;
        }
        let ext = if ext.starts_with('.') {
            ext
        } else {
            format!(".{}", ext)
        };
        self.entries.push((ext, tag));
        self
    }

    /// Resolve a path to its language tag.
    pub fn resolve(&self, path: &str) -> Option<LanguageTag> {
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path).to_lowercase();
        self.entries
            .iter()
            .find(|(ext, _)| file_name.ends_with(ext.as_str()))
            .map(|(_, tag)| *tag)
    }

    pub fn is_supported(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
