//! Splits input text into literal text and token occurrences for one map.

use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::resolver::{self, Segment};
use crate::symbol_map::SymbolMap;

#[derive(Debug, Clone, Error)]
pub enum SegmentationError {
    #[error("map has no tokens")]
    EmptyVocabulary,
    #[error("regex compile error: {0}")]
    RegexCompile(#[from] regex::Error),
}

/// One piece of split input, before tokens are resolved to semantic keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Literal(String),
    Token { token: String, has_dot: bool },
}

/// Builds the alternation `\.?(?:tok1|tok2|...)`. Tokens are literal text and
/// are tried in declaration order; the dotted form is preferred at a position.
pub(crate) fn compile(tokens: &[String]) -> Result<Regex, SegmentationError> {
    if tokens.is_empty() {
        return Err(SegmentationError::EmptyVocabulary);
    }
    let alternation = tokens
        .iter()
        .map(|token| regex::escape(token))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Regex::new(&format!(r"\.?(?:{alternation})"))?)
}

/// Splits `input` against the tokens of `map`.
///
/// Literal fragments alternate with token fragments and are kept even when
/// empty, so the output always starts and ends with a literal.
pub fn try_split(input: &str, map: &SymbolMap) -> Result<Vec<Fragment>, SegmentationError> {
    let matcher = map.matcher()?;

    let mut fragments = Vec::new();
    let mut last = 0;
    for found in matcher.find_iter(input) {
        fragments.push(Fragment::Literal(input[last..found.start()].to_string()));
        fragments.push(classify(found.as_str(), map));
        last = found.end();
    }
    fragments.push(Fragment::Literal(input[last..].to_string()));
    Ok(fragments)
}

/// Like [`try_split`] but a map that cannot segment yields no fragments.
pub fn split(input: &str, map: &SymbolMap) -> Vec<Fragment> {
    match try_split(input, map) {
        Ok(fragments) => fragments,
        Err(SegmentationError::EmptyVocabulary) => Vec::new(),
        Err(err) => {
            warn!(error = %err, "segmentation failed");
            Vec::new()
        }
    }
}

/// Splits and resolves `input` against `map`.
pub fn segment(input: &str, map: &SymbolMap) -> Vec<Segment> {
    resolver::resolve(split(input, map), map)
}

fn classify(matched: &str, map: &SymbolMap) -> Fragment {
    if let Some(bare) = matched.strip_prefix('.') {
        if map.contains_token(bare) {
            return Fragment::Token {
                token: bare.to_string(),
                has_dot: true,
            };
        }
    }
    if map.contains_token(matched) {
        Fragment::Token {
            token: matched.to_string(),
            has_dot: false,
        }
    } else {
        Fragment::Literal(matched.to_string())
    }
}
