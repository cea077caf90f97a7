//! Sample maps and input for trying the translator out.

use crate::registry::MapRegistry;

pub const EXAMPLE_MAP: &str = r#"{"timeline":["Ac1HR"],"post":["FwDxs","8anIv"]}"#;
pub const EXAMPLE_MAP_TWO: &str = r#"{"timeline":["BXfYg"],"post":["C3MCM","zyZjj"]}"#;

pub const EXAMPLE_INPUT: &str = r#".Ac1HR .8anIv {
  display: block;
}

<div class="Ac1HR">
  <div class="FwDxs">hello</div>
</div>"#;

/// Both sample maps, older first.
pub fn registry() -> MapRegistry {
    MapRegistry::from_texts([EXAMPLE_MAP, EXAMPLE_MAP_TWO])
}
