//! Picks the map an input was most likely written against.
//!
//! The heuristic is a plain match count: the map whose tokens occur most often
//! in the input wins, and the earliest slot wins a tie. Maps with overlapping
//! vocabularies can fool it.

use tracing::{debug, warn};

use crate::registry::MapRegistry;
use crate::resolver::{self, Segment};
use crate::segmenter;
use crate::symbol_map::SymbolMap;

/// One map's segmentation of the input.
#[derive(Debug, Clone)]
pub struct ScoredSegmentation<'a> {
    pub map_index: usize,
    pub map: &'a SymbolMap,
    pub segments: Vec<Segment>,
    pub match_count: usize,
}

/// The winning segmentation. `map_index` is `None` when no map could segment
/// the input, in which case `segments` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestMatch {
    pub map_index: Option<usize>,
    pub segments: Vec<Segment>,
    pub match_count: usize,
}

/// Segments `input` with every map that has tokens. Maps whose matcher cannot
/// be built are left out.
pub fn score_all<'a>(input: &str, registry: &'a MapRegistry) -> Vec<ScoredSegmentation<'a>> {
    registry
        .maps_with_tokens()
        .filter_map(|(map_index, map)| match segmenter::try_split(input, map) {
            Ok(fragments) => {
                let segments = resolver::resolve(fragments, map);
                let match_count = resolver::match_count(&segments);
                debug!(map_index, match_count, "scored css map");
                Some(ScoredSegmentation {
                    map_index,
                    map,
                    segments,
                    match_count,
                })
            }
            Err(err) => {
                warn!(map_index, error = %err, "css map skipped");
                None
            }
        })
        .collect()
}

pub fn select_best(input: &str, registry: &MapRegistry) -> BestMatch {
    let mut best: Option<ScoredSegmentation<'_>> = None;
    for scored in score_all(input, registry) {
        if best
            .as_ref()
            .map_or(true, |current| scored.match_count > current.match_count)
        {
            best = Some(scored);
        }
    }

    match best {
        Some(scored) => {
            debug!(map_index = scored.map_index, match_count = scored.match_count, "best css map");
            BestMatch {
                map_index: Some(scored.map_index),
                segments: scored.segments,
                match_count: scored.match_count,
            }
        }
        None => BestMatch::default(),
    }
}
