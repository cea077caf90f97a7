//! Parsing of a single CSS map definition into a queryable symbol map.
//!
//! A CSS map is a JSON object from a semantic key (`"timeline"`) to the list
//! of obfuscated class names that currently stand for it (`["Ac1HR"]`).

use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

use crate::segmenter::{self, SegmentationError};

#[derive(Debug, Error)]
pub enum MapParseError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct SymbolMap {
    raw_text: String,
    valid: bool,
    forward: IndexMap<String, Vec<String>>,
    tokens: Vec<String>,
    semantic_keys: Vec<String>,
    reverse: HashMap<String, String>,
    // Compiled on first segmentation and reused afterwards
    matcher: OnceCell<Result<Regex, SegmentationError>>,
}

impl SymbolMap {
    /// An empty slot: valid, but contributes no tokens.
    pub fn blank() -> Self {
        Self {
            raw_text: String::new(),
            valid: true,
            forward: IndexMap::new(),
            tokens: Vec::new(),
            semantic_keys: Vec::new(),
            reverse: HashMap::new(),
            matcher: OnceCell::new(),
        }
    }

    /// Parses `raw_text`, never failing. Rejected text yields an invalid map
    /// with no tokens that still remembers its raw text.
    pub fn parse(raw_text: &str) -> Self {
        match Self::try_parse(raw_text) {
            Ok(map) => map,
            Err(err) => {
                warn!(error = %err, "css map rejected");
                Self {
                    raw_text: raw_text.to_string(),
                    valid: false,
                    ..Self::blank()
                }
            }
        }
    }

    pub fn try_parse(raw_text: &str) -> Result<Self, MapParseError> {
        if raw_text.is_empty() {
            return Ok(Self::blank());
        }
        let forward: IndexMap<String, Vec<String>> = serde_json::from_str(raw_text)?;
        Ok(Self::from_forward(raw_text.to_string(), forward))
    }

    fn from_forward(raw_text: String, forward: IndexMap<String, Vec<String>>) -> Self {
        let semantic_keys = forward
            .keys()
            .filter(|key| !key.is_empty())
            .cloned()
            .collect();
        let tokens = forward
            .values()
            .flatten()
            .filter(|token| !token.is_empty())
            .cloned()
            .collect();

        // Last write wins when a token is listed under several keys
        let mut reverse = HashMap::new();
        for (key, key_tokens) in &forward {
            for token in key_tokens {
                reverse.insert(token.clone(), key.clone());
            }
        }

        Self {
            raw_text,
            valid: true,
            forward,
            tokens,
            semantic_keys,
            reverse,
            matcher: OnceCell::new(),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn forward_map(&self) -> &IndexMap<String, Vec<String>> {
        &self.forward
    }

    pub fn reverse_map(&self) -> &HashMap<String, String> {
        &self.reverse
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn semantic_keys(&self) -> &[String] {
        &self.semantic_keys
    }

    pub fn has_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|known| known == token)
    }

    /// Semantic key a token resolves to, per the reverse map.
    pub fn key_for(&self, token: &str) -> Option<&str> {
        self.reverse.get(token).map(String::as_str)
    }

    /// Every token currently declared for `key`, in declaration order.
    pub fn tokens_for(&self, key: &str) -> Option<&[String]> {
        self.forward.get(key).map(Vec::as_slice)
    }

    pub(crate) fn matcher(&self) -> Result<&Regex, SegmentationError> {
        self.matcher
            .get_or_init(|| segmenter::compile(&self.tokens))
            .as_ref()
            .map_err(|err| err.clone())
    }

    #[cfg(test)]
    pub(crate) fn without_reverse_entry(mut self, token: &str) -> Self {
        self.reverse.remove(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_json_key_keeps_first_position() {
        let map = SymbolMap::parse(r#"{"a":["x"],"b":["y"],"a":["z"]}"#);
        assert!(map.is_valid());
        let keys: Vec<&str> = map.forward_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.tokens_for("a"), Some(&["z".to_string()][..]));
    }

    #[test]
    fn matcher_is_cached() {
        let map = SymbolMap::parse(r#"{"a":["x"]}"#);
        let first = map.matcher().unwrap() as *const Regex;
        let second = map.matcher().unwrap() as *const Regex;
        assert_eq!(first, second);
    }

    #[test]
    fn blank_map_has_no_matcher() {
        let map = SymbolMap::blank();
        assert!(matches!(map.matcher(), Err(SegmentationError::EmptyVocabulary)));
    }
}
