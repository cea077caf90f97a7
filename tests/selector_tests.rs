use css_map_translator::registry::MapRegistry;
use css_map_translator::selector::{score_all, select_best};

const OLD_MAP: &str = r#"{"timeline":["Ac1HR"],"post":["FwDxs","8anIv"]}"#;
const NEW_MAP: &str = r#"{"timeline":["BXfYg"],"post":["C3MCM","zyZjj"]}"#;
const INPUT: &str = r#".Ac1HR .8anIv { display: block; } <div class="Ac1HR"> ... </div>"#;

#[test]
fn older_map_wins_for_old_input() {
    let registry = MapRegistry::from_texts([OLD_MAP, NEW_MAP]);
    let best = select_best(INPUT, &registry);
    assert_eq!(best.map_index, Some(0));
    assert_eq!(best.match_count, 3);
}

#[test]
fn map_with_more_occurrences_wins() {
    let registry = MapRegistry::from_texts([r#"{"a":["foo"]}"#, r#"{"a":["foo"],"b":["bar"]}"#]);
    let best = select_best("foo bar .bar", &registry);
    assert_eq!(best.map_index, Some(1));
    assert_eq!(best.match_count, 3);
}

#[test]
fn tie_goes_to_earliest_map() {
    let registry = MapRegistry::from_texts([r#"{"a":["foo"]}"#, r#"{"b":["bar"]}"#]);
    let best = select_best("foo bar", &registry);
    assert_eq!(best.map_index, Some(0));
    assert_eq!(best.match_count, 1);
}

#[test]
fn zero_matches_still_picks_first_candidate() {
    let registry = MapRegistry::from_texts([OLD_MAP, NEW_MAP]);
    let best = select_best("plain text", &registry);
    assert_eq!(best.map_index, Some(0));
    assert_eq!(best.match_count, 0);
    assert_eq!(best.segments.len(), 1);
}

#[test]
fn slot_indices_skip_empty_maps() {
    let registry = MapRegistry::from_texts(["", "{bad", NEW_MAP]);
    let best = select_best(".BXfYg", &registry);
    assert_eq!(best.map_index, Some(2));
}

#[test]
fn no_maps_with_tokens_gives_empty_match() {
    let registry = MapRegistry::from_texts(["", "{bad"]);
    let best = select_best(INPUT, &registry);
    assert_eq!(best.map_index, None);
    assert!(best.segments.is_empty());
    assert_eq!(best.match_count, 0);
    assert!(score_all(INPUT, &registry).is_empty());
}

#[test]
fn score_all_reports_every_candidate() {
    let registry = MapRegistry::from_texts([OLD_MAP, "", NEW_MAP]);
    let scores: Vec<(usize, usize)> = score_all(INPUT, &registry)
        .iter()
        .map(|scored| (scored.map_index, scored.match_count))
        .collect();
    assert_eq!(scores, vec![(0, 3), (2, 0)]);
}
