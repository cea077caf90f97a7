use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{info, warn};

use crate::config::{load_config, Overrides};
use crate::demo;
use crate::errors::AppError;
use crate::registry::MapRegistry;
use crate::translator::{translate, Translation};

#[derive(Parser)]
#[command(name = "css-map-translator", version)]
#[command(about = "Translate obfuscated CSS class names to the newest CSS map")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate text written against one of the given maps
    Translate(TranslateArgs),
    /// Report which map files parse
    Check {
        /// CSS map files, oldest first
        #[arg(short, long = "map", required = true)]
        maps: Vec<PathBuf>,
    },
    /// Translate the bundled sample input
    Demo {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::All)]
        format: OutputFormat,
    },
}

#[derive(Args)]
pub struct TranslateArgs {
    /// CSS map files, oldest first
    #[arg(short, long = "map")]
    pub maps: Vec<PathBuf>,

    /// Text to translate; stdin when absent
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::All)]
    pub format: OutputFormat,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub marker: Option<String>,

    #[arg(long)]
    pub css_helper: Option<String>,

    #[arg(long)]
    pub classes_helper: Option<String>,
}

impl TranslateArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            marker: self.marker.clone(),
            css_helper: self.css_helper.clone(),
            classes_helper: self.classes_helper.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Semantic,
    Template,
    Updated,
    All,
}

pub async fn translate_command(args: TranslateArgs) -> Result<String, AppError> {
    let cfg = load_config(args.config.as_deref(), &args.overrides())?;
    let paths: Vec<&Path> = cfg
        .maps
        .iter()
        .chain(args.maps.iter())
        .map(PathBuf::as_path)
        .collect();
    if paths.is_empty() {
        return Err(AppError::Other("no css maps given".into()));
    }

    let registry = load_registry(&paths).await?;
    let input = read_input(args.input.as_deref()).await?;
    let translation = translate(&registry, &input, &cfg.render_style());
    Ok(format_translation(&translation, args.format))
}

pub async fn check_command(maps: Vec<PathBuf>) -> Result<String, AppError> {
    let paths: Vec<&Path> = maps.iter().map(PathBuf::as_path).collect();
    let registry = load_registry(&paths).await?;

    let mut out = String::new();
    for (slot, path) in registry.slots().zip(&paths) {
        let line = if slot.valid {
            format!(
                "{}: {} ({} tokens, {} keys)\n",
                slot.index,
                path.display(),
                slot.token_count,
                slot.key_count
            )
        } else {
            format!("{}: {} INVALID\n", slot.index, path.display())
        };
        out.push_str(&line);
    }
    Ok(out)
}

pub fn demo_command(format: OutputFormat) -> String {
    let translation = translate(&demo::registry(), demo::EXAMPLE_INPUT, &Default::default());
    format_translation(&translation, format)
}

/// Reads every map file into its own slot, oldest first.
pub async fn load_registry(paths: &[&Path]) -> Result<MapRegistry, AppError> {
    let mut registry = MapRegistry::new();
    for (index, path) in paths.iter().enumerate() {
        info!("Reading css map from {}", path.display());
        let text = tokio::fs::read_to_string(path).await?;
        let map = registry.set_map_at(index, &text)?;
        if !map.is_valid() {
            warn!("{} is not a valid css map", path.display());
        }
    }
    Ok(registry)
}

async fn read_input(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut input = String::new();
            tokio::io::stdin().read_to_string(&mut input).await?;
            Ok(input)
        }
    }
}

pub fn format_translation(translation: &Translation, format: OutputFormat) -> String {
    match format {
        OutputFormat::Semantic => translation.semantic.clone(),
        OutputFormat::Template => translation.template.clone(),
        OutputFormat::Updated => translation.updated.clone(),
        OutputFormat::All => {
            let best = match translation.best.map_index {
                Some(index) => format!("map {} ({} matches)", index, translation.best.match_count),
                None => "none".to_string(),
            };
            let reports: String = translation
                .update_reports
                .iter()
                .map(|report| format!("map {}: {} resolved\n", report.map_index, report.resolved))
                .collect();
            format!(
                "best match: {}\n{}\n== translated ==\n{}\n\n== template ==\n{}\n\n== updated ({} resolved) ==\n{}\n",
                best,
                reports,
                translation.semantic,
                translation.template,
                translation.updated_resolved,
                translation.updated
            )
        }
    }
}
