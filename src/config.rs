use std::path::{Path, PathBuf};
use serde::Deserialize;
use config as config_rs;
use thiserror::Error;

use crate::render::RenderStyle;

/// Environment variables with this prefix override file settings,
/// e.g. `CSS_MAP_MARKER`. `CSS_MAP_MAPS` takes a comma-separated list.
pub const ENV_PREFIX: &str = "CSS_MAP";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Map files, oldest first.
    pub maps: Vec<PathBuf>,
    pub marker: String,
    pub css_helper: String,
    pub classes_helper: String,
}

impl AppConfig {
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            marker: self.marker.clone(),
            css_helper: self.css_helper.clone(),
            classes_helper: self.classes_helper.clone(),
        }
    }
}

/// Values given on the command line; these take precedence over everything.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub marker: Option<String>,
    pub css_helper: Option<String>,
    pub classes_helper: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
}

pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<AppConfig, ConfigError> {
    let defaults = RenderStyle::default();
    let mut builder = config_rs::Config::builder()
        .set_default("maps", Vec::<String>::new())?
        .set_default("marker", defaults.marker)?
        .set_default("css_helper", defaults.css_helper)?
        .set_default("classes_helper", defaults.classes_helper)?;

    if let Some(path) = path {
        builder = builder.add_source(config_rs::File::from(path));
    }
    builder = builder.add_source(
        config_rs::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("maps"),
    );

    // CLI flags take precedence
    if let Some(marker) = &overrides.marker {
        builder = builder.set_override("marker", marker.clone())?;
    }
    if let Some(helper) = &overrides.css_helper {
        builder = builder.set_override("css_helper", helper.clone())?;
    }
    if let Some(helper) = &overrides.classes_helper {
        builder = builder.set_override("classes_helper", helper.clone())?;
    }

    Ok(builder.build()?.try_deserialize()?)
}
