//! # Mesh Errors
//!
//! Error types for mesh building. Geometry queries on the lattice itself are
//! infallible; only configuration and buffer construction can fail.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while configuring a grid or building a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Grid parameters were rejected by the configuration layer
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What was degenerate
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Requested vertex count
        count: usize,
        /// Configured limit
        max: usize,
    },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles {
        /// Requested triangle count
        count: usize,
        /// Configured limit
        max: usize,
    },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
