// Kept in its own test binary: the variable is process-wide.
use css_map_translator::config::{load_config, Overrides};
use std::path::PathBuf;

#[test]
fn maps_env_var_is_a_comma_separated_list() {
    std::env::set_var("CSS_MAP_MAPS", "old.json,new.json");
    std::env::set_var("CSS_MAP_MARKER", "@");

    let cfg = load_config(None, &Overrides::default()).unwrap();
    assert_eq!(cfg.maps, vec![PathBuf::from("old.json"), PathBuf::from("new.json")]);
    assert_eq!(cfg.marker, "@");
    assert_eq!(cfg.css_helper, "keyToCss");

    std::env::remove_var("CSS_MAP_MAPS");
    std::env::remove_var("CSS_MAP_MARKER");
}
