//! Centralized configuration values shared across the triangular grid
//! workspace.
//!
//! Each public item documents its purpose and most provide a minimal usage
//! example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometry kernels.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Distance, in pixels, under which two independently rounded points are
/// considered the same canvas location.
///
/// Neighbouring triangles compute their shared vertices from different
/// centers, so after rounding each coordinate may differ by one pixel.
///
/// # Examples
/// ```
/// use config::constants::PIXEL_TOLERANCE;
/// let a = (52.0_f64, 60.0_f64);
/// let b = (51.0_f64, 60.0_f64);
/// assert!((a.0 - b.0).abs() <= PIXEL_TOLERANCE);
/// ```
pub const PIXEL_TOLERANCE: f64 = 1.0;

// =============================================================================
// LATTICE CONSTANTS
// =============================================================================

/// `√3 / 2`, the ratio between a triangle's circumradius and the horizontal
/// step between neighbouring centers.
pub const SQRT_3_OVER_2: f64 = 0.866_025_403_784_438_6;

/// Default triangle circumradius in pixels.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RADIUS;
/// assert!(DEFAULT_RADIUS > 0.0);
/// ```
pub const DEFAULT_RADIUS: f64 = 30.0;

/// Number of rows and columns a canvas consumer iterates when it has no
/// better bound for the viewport.
pub const DEFAULT_CANVAS_EXTENT: i32 = 20;

/// Half-extent of the `(i, j)` range a surface consumer iterates by default:
/// `-DEFAULT_SURFACE_EXTENT..DEFAULT_SURFACE_EXTENT` on both axes.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SURFACE_EXTENT;
/// let cells = (2 * DEFAULT_SURFACE_EXTENT).pow(2);
/// assert_eq!(cells, 10_000);
/// ```
pub const DEFAULT_SURFACE_EXTENT: i32 = 50;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from oversized surfaces.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// # Examples
/// ```
/// use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
/// // Surfaces emit three unshared vertices per triangle.
/// assert!(MAX_TRIANGLES * 3 >= MAX_VERTICES);
/// ```
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// SKETCH CONSTANTS
// =============================================================================

/// Default canvas width for sketches, in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1000;

/// Default canvas height for sketches, in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1000;

/// Seed used when a host does not supply one.
pub const DEFAULT_SEED: u64 = 0x5EED;

// =============================================================================
// GRID CONFIGURATION
// =============================================================================

/// Validated parameters for a triangular grid.
///
/// # Examples
/// ```
/// use config::constants::GridConfig;
/// let config = GridConfig::default();
/// assert!(config.radius > 0.0);
/// assert!(config.pixel_snap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Circumradius of every triangle.
    pub radius: f64,
    /// Horizontal offset added to every center.
    pub origin_x: f64,
    /// Vertical offset added to every center.
    pub origin_y: f64,
    /// Round points to integer pixels (canvas) or keep them continuous
    /// (surface building).
    pub pixel_snap: bool,
}

impl GridConfig {
    /// Builds a configuration enforcing a finite, positive radius and finite
    /// origin offsets.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GridConfig;
    /// let cfg = GridConfig::new(10.0, 5.0, -5.0, false).expect("valid config");
    /// assert_eq!(cfg.origin_x, 5.0);
    /// assert!(GridConfig::new(-1.0, 0.0, 0.0, true).is_err());
    /// ```
    pub fn new(
        radius: f64,
        origin_x: f64,
        origin_y: f64,
        pixel_snap: bool,
    ) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if !origin_x.is_finite() || !origin_y.is_finite() {
            return Err(ConfigError::InvalidOrigin(origin_x, origin_y));
        }
        Ok(Self {
            radius,
            origin_x,
            origin_y,
            pixel_snap,
        })
    }

    /// Same grid with continuous (unrounded) coordinates, as surface
    /// builders need.
    pub fn continuous(self) -> Self {
        Self {
            pixel_snap: false,
            ..self
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            origin_x: 0.0,
            origin_y: 0.0,
            pixel_snap: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the radius is zero, negative or not finite.
    InvalidRadius(f64),
    /// Raised when either origin offset is not finite.
    InvalidOrigin(f64, f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(value) => {
                write!(f, "radius must be finite and positive: {value}")
            }
            ConfigError::InvalidOrigin(x, y) => {
                write!(f, "origin must be finite: ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
