pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod logger;
pub mod registry;
pub mod render;
pub mod resolver;
pub mod segmenter;
pub mod selector;
pub mod symbol_map;
pub mod translator;

pub use registry::MapRegistry;
pub use render::RenderStyle;
pub use resolver::{Segment, SemanticKey, SymbolRef, UNKNOWN};
pub use symbol_map::SymbolMap;
pub use translator::{translate, Translation};
