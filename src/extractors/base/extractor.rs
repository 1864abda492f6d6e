// BaseExtractor implementation
//
// Shared state and text utilities for every language adapter: node text access,
// signature normalization, doc comment lookup, and declaration construction.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;
use tree_sitter::Node;

use super::types::{Declaration, DeclarationKind};
use crate::language::LanguageTag;

/// Default maximum signature width in characters
pub const DEFAULT_MAX_SIGNATURE_WIDTH: usize = 120;

/// Marker appended to signatures and doc lines that were cut
pub const ELLIPSIS: &str = "...";

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace regex"));

static DOC_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?:/\*\*+|/\*!?|\*/|\*+|//!|///?|#+|=begin|[rRuUbB]{0,2}(?P<quote>"""|'''|"|'))?\s*"#,
    )
    .expect("static doc prefix regex")
});

static DOC_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s*(?:\*+/|"""|''')\s*$"#).expect("static doc suffix regex")
});

/// Fields where a declaration header ends, in order of preference
const HEADER_STOP_FIELDS: &[&str] = &["body", "value"];

/// Nodes with a `name` field that wrap declarations instead of declaring one
const NAMED_CONTAINERS: &[&str] = &["preproc_ifdef", "preproc_elifdef"];

/// Node kinds that wrap a declaration without being one; doc comments sit above them.
const DOC_WRAPPERS: &[&str] = &[
    "export_statement",
    "decorated_definition",
    "ambient_declaration",
];

/// Node kinds skipped while walking upwards from a declaration to its comment.
const DOC_TRANSPARENT: &[&str] = &["attribute_item", "decorator", "annotation"];

/// Base implementation for language adapters
pub struct BaseExtractor {
    pub language: LanguageTag,
    pub content: String,
    pub max_signature_width: usize,
    /// Byte offset of the first syntax fault; see [`Self::accepts`]
    pub fault_byte: Option<usize>,
}

impl BaseExtractor {
    pub fn new(language: LanguageTag, content: String, max_signature_width: usize) -> Self {
        Self {
            language,
            content,
            max_signature_width,
            fault_byte: None,
        }
    }

    pub fn with_fault_byte(mut self, fault_byte: Option<usize>) -> Self {
        self.fault_byte = fault_byte;
        self
    }

    /// Whether `node` lies in the well-formed prefix of the source.
    ///
    /// A node must start before the first syntax fault, and the fault must not sit
    /// inside its declaration header. A container whose body holds the fault is
    /// still accepted.
    pub fn accepts(&self, node: &Node) -> bool {
        let Some(fault) = self.fault_byte else {
            return true;
        };
        if node.start_byte() >= fault {
            return false;
        }
        declaration_header_end(node).map_or(true, |header_end| fault >= header_end)
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        self.slice(node.start_byte(), node.end_byte())
    }

    /// Byte slice of the content, lossy across invalid UTF-8 boundaries
    pub fn slice(&self, start_byte: usize, end_byte: usize) -> String {
        let content_bytes = self.content.as_bytes();
        if start_byte <= end_byte && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Text of the named field, if present
    pub fn field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }

    /// Declaration header: source text from the node start to the first present
    /// `stop_fields` child (the body or value), with trailing `{`, `=`, `;` dropped.
    ///
    /// Falls back to the whole node text when none of the fields exist.
    pub fn header_text(&self, node: &Node, stop_fields: &[&str]) -> String {
        self.header_from(node, node.start_byte(), stop_fields)
    }

    /// [`Self::header_text`] starting at `start_byte` instead of the node start,
    /// for languages whose leading annotations are not part of the signature.
    pub fn header_from(&self, node: &Node, start_byte: usize, stop_fields: &[&str]) -> String {
        let end = stop_fields
            .iter()
            .filter_map(|field| node.child_by_field_name(field))
            .map(|child| child.start_byte())
            .min()
            .unwrap_or_else(|| node.end_byte());
        self.header_span(start_byte, end)
    }

    /// Trimmed header text for an explicit byte range
    pub fn header_span(&self, start_byte: usize, end_byte: usize) -> String {
        trim_header(&self.slice(start_byte.min(end_byte), end_byte)).to_string()
    }

    /// Node text with the `hole` child cut out, e.g. `typedef struct { .. } Foo;`
    /// becomes `typedef struct Foo`.
    pub fn text_without(&self, node: &Node, hole: &Node) -> String {
        let before = self.slice(node.start_byte(), hole.start_byte());
        let after = self.slice(hole.end_byte(), node.end_byte());
        trim_header(&format!("{} {}", before.trim_end(), after.trim_start())).to_string()
    }

    /// First line of the node text
    pub fn first_line(&self, node: &Node) -> String {
        let text = self.get_node_text(node);
        text.lines().next().unwrap_or("").trim().to_string()
    }

    /// Collapse whitespace and enforce the configured width
    pub fn normalize_signature(&self, raw: &str) -> String {
        normalize_line(raw, self.max_signature_width)
    }

    /// Find the comment block directly above a declaration.
    ///
    /// Walks previous siblings while they are comments on adjacent lines, skipping
    /// attributes and decorators. `is_doc` filters which comment texts qualify.
    /// Wrapper nodes (`export_statement`, ...) are checked when the node itself has
    /// nothing above it.
    pub fn find_doc_comment<F>(&self, node: &Node, is_doc: F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        if let Some(doc) = self.comment_block_above(node, &is_doc) {
            return Some(doc);
        }
        let parent = node.parent()?;
        if DOC_WRAPPERS.contains(&parent.kind()) {
            return self.comment_block_above(&parent, &is_doc);
        }
        None
    }

    fn comment_block_above<F>(&self, node: &Node, is_doc: &F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        let mut comments = Vec::new();
        let mut boundary_row = node.start_position().row;
        let mut current = node.prev_sibling();

        while let Some(sibling) = current {
            if DOC_TRANSPARENT.contains(&sibling.kind()) {
                boundary_row = sibling.start_position().row;
                current = sibling.prev_sibling();
                continue;
            }
            if !sibling.kind().contains("comment") {
                break;
            }
            // A blank line detaches the comment from the declaration
            if sibling.end_position().row + 1 < boundary_row {
                break;
            }
            let text = self.get_node_text(&sibling);
            if !is_doc(&text) {
                break;
            }
            comments.push(text);
            boundary_row = sibling.start_position().row;
            current = sibling.prev_sibling();
        }

        if comments.is_empty() {
            None
        } else {
            comments.reverse();
            Some(comments.join("\n"))
        }
    }

    /// First meaningful line of a comment or docstring, stripped of markers
    pub fn doc_first_line(&self, raw: &str) -> Option<String> {
        raw.lines()
            .map(|line| {
                let Some(caps) = DOC_PREFIX_RE.captures(line) else {
                    return line.trim().to_string();
                };
                let rest = &line[caps.get(0).map_or(0, |m| m.end())..];
                // A string literal opened on this line closes with the same quote
                let rest = match caps.name("quote") {
                    Some(quote) => rest.trim_end().strip_suffix(quote.as_str()).unwrap_or(rest),
                    None => rest,
                };
                DOC_SUFFIX_RE.replace(rest, "").trim().to_string()
            })
            .find(|line| !line.is_empty())
            .map(|line| normalize_line(&line, self.max_signature_width))
    }

    /// Create a declaration from a node
    pub fn create_declaration(
        &self,
        node: &Node,
        name: String,
        kind: DeclarationKind,
        signature: &str,
        depth: u32,
        doc: Option<String>,
    ) -> Declaration {
        let start_pos = node.start_position();
        let end_pos = node.end_position();

        trace!(
            "{} {} '{}' at line {} depth {}",
            self.language,
            kind,
            name,
            start_pos.row + 1,
            depth
        );

        Declaration {
            kind,
            name,
            signature: self.normalize_signature(signature),
            start_line: (start_pos.row + 1) as u32,
            end_line: (end_pos.row + 1) as u32,
            depth,
            doc_first_line: doc.and_then(|raw| self.doc_first_line(&raw)),
        }
    }
}

/// End of the header of a declaration-shaped node: the start of its body or value,
/// or the node end for a named leaf. `None` for nodes that are not declarations.
fn declaration_header_end(node: &Node) -> Option<usize> {
    // Go struct and interface bodies hang off the `type` field of a `type_spec`
    let stop_fields: &[&str] = if node.kind() == "type_spec" {
        &["type"]
    } else {
        HEADER_STOP_FIELDS
    };
    stop_fields
        .iter()
        .find_map(|field| node.child_by_field_name(field))
        .map(|child| child.start_byte())
        .or_else(|| {
            if NAMED_CONTAINERS.contains(&node.kind()) {
                return None;
            }
            node.child_by_field_name("name").map(|_| node.end_byte())
        })
}

/// Drop trailing whitespace and body openers from a declaration header
fn trim_header(text: &str) -> &str {
    text.trim()
        .trim_end_matches(|c: char| c == '{' || c == '=' || c == ';' || c.is_whitespace())
}

/// Collapse whitespace runs to single spaces and cut to `max_chars` with an ellipsis.
///
/// Truncation counts characters, not bytes, so multi-byte text is never split.
pub fn normalize_line(text: &str, max_chars: usize) -> String {
    let collapsed = WHITESPACE_RE.replace_all(text.trim(), " ");
    if collapsed.chars().count() <= max_chars {
        collapsed.into_owned()
    } else {
        collapsed.chars().take(max_chars).collect::<String>() + ELLIPSIS
    }
}
