//! Text output for a resolved segmentation.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use thiserror::Error;
use tracing::warn;

use crate::resolver::{Segment, SemanticKey, SymbolRef, UNKNOWN};
use crate::symbol_map::SymbolMap;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("format error: {0}")]
    Format(#[from] fmt::Error),
}

/// Strings used by the semantic-key and template renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub marker: String,
    pub css_helper: String,
    pub classes_helper: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            marker: "ⓣ".to_string(),
            css_helper: "keyToCss".to_string(),
            classes_helper: "keyToClasses".to_string(),
        }
    }
}

/// Text re-rendered against a current map, with the number of references
/// whose semantic key that map still defines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatedRender {
    pub text: String,
    pub resolved: usize,
}

/// `.ⓣtimeline` for selectors, `ⓣtimeline` for class names.
pub fn try_render_semantic(segments: &[Segment], style: &RenderStyle) -> Result<String, RenderError> {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Symbol(symbol) => {
                let dot = if symbol.has_dot { "." } else { "" };
                write!(out, "{dot}{}{}", style.marker, symbol.key)?;
            }
        }
    }
    Ok(out)
}

pub fn render_semantic(segments: &[Segment], style: &RenderStyle) -> String {
    recover("semantic", try_render_semantic(segments, style))
}

/// Template-string placeholders: `${keyToCss('timeline')}` for selectors and
/// `${keyToClasses('timeline').join(' ')}` for class names.
pub fn try_render_template(segments: &[Segment], style: &RenderStyle) -> Result<String, RenderError> {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Symbol(symbol) if symbol.has_dot => {
                write!(out, "${{{}('{}')}}", style.css_helper, symbol.key)?;
            }
            Segment::Symbol(symbol) => {
                write!(out, "${{{}('{}').join(' ')}}", style.classes_helper, symbol.key)?;
            }
        }
    }
    Ok(out)
}

pub fn render_template(segments: &[Segment], style: &RenderStyle) -> String {
    recover("template", try_render_template(segments, style))
}

/// Replaces every reference with the tokens `current` declares for its key.
pub fn try_render_updated(segments: &[Segment], current: &SymbolMap) -> Result<UpdatedRender, RenderError> {
    let mut rendered = UpdatedRender::default();
    for segment in segments {
        match segment {
            Segment::Literal(text) => rendered.text.push_str(text),
            Segment::Symbol(symbol) => match current_tokens(symbol, current) {
                Some(tokens) => {
                    rendered.resolved += 1;
                    write_current(&mut rendered.text, symbol, tokens)?;
                }
                None => write_current(&mut rendered.text, symbol, &[UNKNOWN.to_string()])?,
            },
        }
    }
    Ok(rendered)
}

pub fn render_updated(segments: &[Segment], current: &SymbolMap) -> UpdatedRender {
    match try_render_updated(segments, current) {
        Ok(rendered) => rendered,
        Err(err) => {
            warn!(pass = "updated", error = %err, "render failed");
            UpdatedRender::default()
        }
    }
}

/// Number of references whose semantic key `map` defines.
pub fn count_resolved(segments: &[Segment], map: &SymbolMap) -> usize {
    segments
        .iter()
        .filter(|segment| match segment {
            Segment::Symbol(symbol) => current_tokens(symbol, map).is_some(),
            Segment::Literal(_) => false,
        })
        .count()
}

fn current_tokens<'a>(symbol: &SymbolRef, map: &'a SymbolMap) -> Option<&'a [String]> {
    match &symbol.key {
        SemanticKey::Known(key) => map.tokens_for(key),
        SemanticKey::Unknown => None,
    }
}

fn write_current(out: &mut String, symbol: &SymbolRef, tokens: &[String]) -> fmt::Result {
    match tokens {
        [] => Ok(()),
        [single] if symbol.has_dot => write!(out, ".{single}"),
        [single] => out.write_str(single),
        many if symbol.has_dot => {
            let dotted: Vec<String> = many.iter().map(|token| format!(".{token}")).collect();
            write!(out, "is:({})", dotted.join(","))
        }
        many => write!(
            out,
            "MULTIPLE-{}-KEYS: [ {} ]",
            symbol.key.as_str().to_uppercase(),
            many.join(" ")
        ),
    }
}

fn recover(pass: &str, result: Result<String, RenderError>) -> String {
    result.unwrap_or_else(|err| {
        warn!(pass, error = %err, "render failed");
        String::new()
    })
}
