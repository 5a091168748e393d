//! # Height-Field Presets
//!
//! Ready-made height functions for [`TriangleSurface`] and a builder for the
//! default wavy surface.

use crate::error::SketchError;
use config::constants::{GridConfig, DEFAULT_SURFACE_EXTENT};
use tracing::debug;
use trigrid::{GridRange, Mesh, MeshError, TriangleSurface};

/// Amplitude of the default wave.
pub const WAVE_AMPLITUDE: f64 = 0.22;
/// Frequency of the default wave.
pub const WAVE_FREQUENCY: f64 = 5.0;
/// Resting height of the default wave.
pub const WAVE_BASE: f64 = 4.0;

/// Diagonal sine ripple: `amplitude · sin(frequency · (x + y)) + base`.
///
/// # Example
///
/// ```rust
/// use sketches::heightfield::wave;
///
/// let f = wave(0.22, 5.0, 4.0);
/// assert_eq!(f(0.0, 0.0), 4.0);
/// ```
pub fn wave(amplitude: f64, frequency: f64, base: f64) -> impl Fn(f64, f64) -> f64 + Copy + Send + Sync {
    move |x, y| amplitude * (frequency * (x + y)).sin() + base
}

/// Constant height.
pub fn flat(height: f64) -> impl Fn(f64, f64) -> f64 + Copy + Send + Sync {
    move |_, _| height
}

/// Builds the default wave over `-extent..extent` cells on both axes.
///
/// # Errors
///
/// Fails on an invalid radius or when the range exceeds the mesh budget.
pub fn wavy_surface(radius: f64, extent: i32) -> Result<Mesh, SketchError> {
    build_surface(radius, extent, wave(WAVE_AMPLITUDE, WAVE_FREQUENCY, WAVE_BASE))
}

/// Builds a surface for any height field over `-extent..extent` cells.
///
/// # Errors
///
/// Fails when `radius` is not finite and positive, when the range exceeds
/// the mesh budget, or when the field is not finite.
pub fn build_surface<F>(radius: f64, extent: i32, field: F) -> Result<Mesh, SketchError>
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let config = GridConfig::new(radius, 0.0, 0.0, false).map_err(MeshError::from)?;
    let mesh = TriangleSurface::from_config(&config, field).build(&GridRange::square(extent))?;
    debug!(radius, extent, vertices = mesh.vertex_count(), "surface preset built");
    Ok(mesh)
}

/// The default wave over the default extent.
pub fn default_wavy_surface(radius: f64) -> Result<Mesh, SketchError> {
    wavy_surface(radius, DEFAULT_SURFACE_EXTENT)
}
