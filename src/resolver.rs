//! Resolution of token fragments to semantic keys.

use std::borrow::Cow;
use std::fmt;

use crate::segmenter::Fragment;
use crate::symbol_map::SymbolMap;

/// Rendered wherever a token or key cannot be resolved.
pub const UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticKey {
    Known(String),
    Unknown,
}

impl SemanticKey {
    pub fn as_str(&self) -> &str {
        match self {
            SemanticKey::Known(key) => key,
            SemanticKey::Unknown => UNKNOWN,
        }
    }

    pub fn known(&self) -> Option<&str> {
        match self {
            SemanticKey::Known(key) => Some(key),
            SemanticKey::Unknown => None,
        }
    }
}

impl fmt::Display for SemanticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized token occurrence in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRef {
    pub token: String,
    /// Written as a selector (`.token`) rather than a bare class name.
    pub has_dot: bool,
    pub key: SemanticKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Symbol(SymbolRef),
}

impl Segment {
    pub fn is_symbol(&self) -> bool {
        matches!(self, Segment::Symbol(_))
    }

    /// The exact input text this segment was split from.
    pub fn source_text(&self) -> Cow<'_, str> {
        match self {
            Segment::Literal(text) => Cow::Borrowed(text),
            Segment::Symbol(symbol) if symbol.has_dot => Cow::Owned(format!(".{}", symbol.token)),
            Segment::Symbol(symbol) => Cow::Borrowed(&symbol.token),
        }
    }
}

/// Attaches a semantic key to every token fragment using `map`'s reverse map.
/// Tokens missing from the reverse map resolve to [`SemanticKey::Unknown`].
pub fn resolve(fragments: Vec<Fragment>, map: &SymbolMap) -> Vec<Segment> {
    fragments
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Literal(text) => Segment::Literal(text),
            Fragment::Token { token, has_dot } => {
                let key = match map.key_for(&token) {
                    Some(key) => SemanticKey::Known(key.to_string()),
                    None => SemanticKey::Unknown,
                };
                Segment::Symbol(SymbolRef { token, has_dot, key })
            }
        })
        .collect()
}

pub fn match_count(segments: &[Segment]) -> usize {
    segments.iter().filter(|segment| segment.is_symbol()).count()
}

/// Concatenates the source text of `segments`.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments.iter().map(|segment| segment.source_text()).collect()
}
