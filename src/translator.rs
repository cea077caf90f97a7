//! Full translation of one input against a registry snapshot.

use tracing::debug;

use crate::registry::MapRegistry;
use crate::render::{self, RenderStyle};
use crate::selector::{self, BestMatch};

/// How many of the winning references a given map can still name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateReport {
    pub map_index: usize,
    pub resolved: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub best: BestMatch,
    /// Semantic-key form, for reading.
    pub semantic: String,
    /// Template-string form.
    pub template: String,
    /// Input rewritten with the newest map's tokens.
    pub updated: String,
    /// References the newest map could resolve.
    pub updated_resolved: usize,
    /// One entry per map with tokens; shown in the CLI's `all` view.
    pub update_reports: Vec<UpdateReport>,
}

pub fn translate(registry: &MapRegistry, input: &str, style: &RenderStyle) -> Translation {
    let best = selector::select_best(input, registry);
    let semantic = render::render_semantic(&best.segments, style);
    let template = render::render_template(&best.segments, style);

    let updated = registry
        .newest_map()
        .map(|newest| render::render_updated(&best.segments, newest))
        .unwrap_or_default();

    let update_reports = registry
        .maps_with_tokens()
        .map(|(map_index, map)| UpdateReport {
            map_index,
            resolved: render::count_resolved(&best.segments, map),
        })
        .collect();

    debug!(
        best_map = ?best.map_index,
        matches = best.match_count,
        updated_resolved = updated.resolved,
        "translation complete"
    );

    Translation {
        best,
        semantic,
        template,
        updated: updated.text,
        updated_resolved: updated.resolved,
        update_reports,
    }
}
