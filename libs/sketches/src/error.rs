//! Errors surfaced by sketch lookup and surface presets.

use thiserror::Error;
use trigrid::MeshError;

/// Errors from building sketches or preset surfaces.
#[derive(Debug, Error)]
pub enum SketchError {
    /// No sketch is registered under this name
    #[error("Unknown sketch: {0}")]
    UnknownSketch(String),

    /// Surface mesh construction failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SketchError::UnknownSketch("spirals".into());
        assert_eq!(err.to_string(), "Unknown sketch: spirals");

        let err: SketchError = MeshError::degenerate("nan").into();
        assert!(err.to_string().starts_with("Mesh error:"));
    }
}
