//! Outline configuration
//!
//! Every field has a default, so an empty JSON object is a valid configuration.

use crate::error::{OutlineError, Result};
use crate::extractors::base::DEFAULT_MAX_SIGNATURE_WIDTH;
use crate::language::{LanguageRegistry, LanguageTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Signatures and doc lines longer than this many chars are cut with `...`
    pub max_signature_width: usize,
    /// Repeated once per nesting level in front of each outline line
    pub indent_unit: String,
    /// Append `// <first doc line>` to outline lines
    pub include_doc_comments: bool,
    /// Worker pool size; `None` uses one thread per core
    pub worker_threads: Option<usize>,
    /// Extra suffix -> language entries, consulted before the built-in table
    pub extensions: BTreeMap<String, LanguageTag>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            max_signature_width: DEFAULT_MAX_SIGNATURE_WIDTH,
            indent_unit: "  ".to_string(),
            include_doc_comments: true,
            worker_threads: None,
            extensions: BTreeMap::new(),
        }
    }
}

impl OutlineConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: OutlineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_signature_width == 0 {
            return Err(OutlineError::Config(
                "max_signature_width must be greater than 0".to_string(),
            ));
        }
        if self.worker_threads == Some(0) {
            return Err(OutlineError::Config(
                "worker_threads must be greater than 0".to_string(),
            ));
        }
        if let Some(ext) = self
            .extensions
            .keys()
            .find(|ext| ext.trim_matches('.').trim().is_empty())
        {
            return Err(OutlineError::Config(format!(
                "extension '{}' has no suffix",
                ext
            )));
        }
        Ok(())
    }

    /// Build the language registry: configured extensions first, then built-ins
    pub fn registry(&self) -> LanguageRegistry {
        LanguageRegistry::with_overrides(
            self.extensions
                .iter()
                .map(|(ext, tag)| (ext.as_str(), *tag)),
        )
    }
}
