//! # Trigrid
//!
//! Triangular grid coordinates for generative sketches.
//! Maps integer cells `(i, j)` onto a plane tiled with alternating up/down
//! equilateral triangles, and feeds the result to 2D canvases and 3D
//! height-field surfaces.
//!
//! ## Architecture
//!
//! ```text
//! (i, j) → TriangleMesh → Triangle ─┬→ canvas helpers → dyn Canvas2d
//!                                   └→ TriangleSurface → Mesh (GPU buffers)
//! ```
//!
//! ## Coordinate Modes
//!
//! - **Pixel**: centers and vertices snapped to whole pixels, for canvases
//! - **Continuous**: real-valued, for surface building
//!
//! ## Usage
//!
//! ```rust
//! use trigrid::{CoordMode, GridRange, TriangleMesh, TriangleSurface};
//!
//! let grid = TriangleMesh::new(60.0, CoordMode::Pixel);
//! let tri = grid.triangle_at(0, 1);
//! assert_eq!(tri.center.x, 52.0);
//!
//! let surface = TriangleSurface::new(10.0, |x, y| 0.22 * (5.0 * (x + y)).sin() + 4.0);
//! let mesh = surface.build(&GridRange::square(10))?;
//! assert_eq!(mesh.triangle_count(), 400);
//! # Ok::<(), trigrid::MeshError>(())
//! ```

pub mod canvas;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod range;
pub mod surface;
pub mod triangle;

pub use canvas::{Canvas2d, Color, CommandRecorder, CompositeOp, DrawCommand, ImageSource};
pub use error::{MeshError, MeshResult};
pub use grid::TriangleMesh;
pub use mesh::Mesh;
pub use range::{GridCell, GridRange};
pub use surface::TriangleSurface;
pub use triangle::{CoordMode, Orientation, Point, Rect, Triangle};
