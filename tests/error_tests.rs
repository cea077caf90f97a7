use css_map_translator::errors::AppError;
use css_map_translator::registry::{MapRegistry, RegistryError};
use css_map_translator::render::RenderError;
use css_map_translator::segmenter::SegmentationError;

#[test]
fn app_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "fail");
    let app: AppError = io_err.into();
    assert!(matches!(app, AppError::Io(_)));
}

#[test]
fn app_error_from_registry() {
    let err = MapRegistry::new().set_map_at(2, "").unwrap_err();
    let app: AppError = err.into();
    assert!(matches!(app, AppError::Registry(RegistryError::SlotOutOfRange { index: 2, len: 0 })));
    assert_eq!(app.to_string(), "registry error: slot 2 is out of range (registry has 0 slots)");
}

#[test]
fn engine_errors_display() {
    assert_eq!(SegmentationError::EmptyVocabulary.to_string(), "map has no tokens");
    assert_eq!(RenderError::from(std::fmt::Error).to_string(), "format error: an error occurred when formatting an argument");
}
