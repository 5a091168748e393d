//! # Height-Field Surfaces
//!
//! Lifts the planar grid into 3D: each cell's triangle is sampled against a
//! height field `f(x, y)` and emitted as one flat-shaded face.
//!
//! ```text
//! (i, j) → Triangle (continuous) → [x, f(x, y), y] × 3 → face + normal → Mesh
//! ```
//!
//! The scene is y-up, so the planar `y` becomes depth (`z`) and the height
//! goes into `y`.

use crate::error::{MeshError, MeshResult};
use crate::grid::TriangleMesh;
use crate::mesh::{face_normal, Mesh};
use crate::range::{GridCell, GridRange};
use crate::triangle::{CoordMode, Point};
use config::constants::{GridConfig, MAX_TRIANGLES, MAX_VERTICES};
use glam::DVec3;
use rayon::prelude::*;
use tracing::debug;

/// One finished face: three positions and their shared normal.
type Face = ([DVec3; 3], DVec3);

/// Builds triangle meshes from a height field over a grid range.
///
/// The grid is always queried in continuous mode; pixel rounding would open
/// gaps between faces that were sampled from different centers.
///
/// # Example
///
/// ```rust
/// use trigrid::{GridRange, TriangleSurface};
///
/// let surface = TriangleSurface::new(10.0, |x, y| 0.1 * (x + y));
/// let mesh = surface.build(&GridRange::new(0..2, 0..3)).unwrap();
/// assert_eq!(mesh.triangle_count(), 6);
/// assert_eq!(mesh.vertex_count(), 18);
/// ```
pub struct TriangleSurface<F> {
    grid: TriangleMesh,
    height: F,
}

impl<F> TriangleSurface<F>
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    /// Creates a surface over a grid of the given radius anchored at the
    /// origin.
    pub fn new(radius: f64, height: F) -> Self {
        Self::with_grid(TriangleMesh::new(radius, CoordMode::Continuous), height)
    }

    /// Creates a surface over an existing grid. Its mode is forced to
    /// continuous.
    pub fn with_grid(grid: TriangleMesh, height: F) -> Self {
        Self {
            grid: grid.with_mode(CoordMode::Continuous),
            height,
        }
    }

    /// Creates a surface from validated configuration.
    pub fn from_config(config: &GridConfig, height: F) -> Self {
        Self::with_grid(TriangleMesh::from_config(&config.continuous()), height)
    }

    /// The underlying continuous grid.
    pub fn grid(&self) -> &TriangleMesh {
        &self.grid
    }

    /// Samples the height field at a planar point, returning the scene
    /// position `[x, f(x, y), y]`.
    #[inline]
    pub fn lift(&self, point: Point) -> DVec3 {
        DVec3::new(point.x, (self.height)(point.x, point.y), point.y)
    }

    /// Builds one face per cell of `range`.
    ///
    /// Faces are computed in parallel and appended row-major, three fresh
    /// vertices each, every vertex carrying its face's normal.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::TooManyTriangles`] or
    /// [`MeshError::TooManyVertices`] when the range exceeds the mesh budget
    /// (nothing is allocated in that case), and
    /// [`MeshError::DegenerateGeometry`] when the height field returns a
    /// non-finite value.
    pub fn build(&self, range: &GridRange) -> MeshResult<Mesh> {
        let triangles = range.len();
        check_budget(triangles)?;

        let cells: Vec<GridCell> = range.cells().collect();
        let faces: Vec<Face> = cells
            .par_iter()
            .map(|cell| self.face(*cell))
            .collect::<MeshResult<_>>()?;

        let mut mesh = Mesh::with_capacity(triangles * 3, triangles);
        for (positions, normal) in faces {
            mesh.add_flat_face(positions, normal);
        }

        debug!(
            cells = cells.len(),
            triangles = mesh.triangle_count(),
            radius = self.grid.radius(),
            "built height-field surface"
        );

        Ok(mesh)
    }

    fn face(&self, cell: GridCell) -> MeshResult<Face> {
        let [a, b, c] = self.grid.triangle(cell).vertices().map(|p| self.lift(p));
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(MeshError::degenerate(format!(
                "non-finite height at cell ({}, {})",
                cell.i, cell.j
            )));
        }
        Ok(([a, b, c], face_normal(a, b, c)))
    }
}

fn check_budget(triangles: usize) -> MeshResult<()> {
    if triangles > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangles,
            max: MAX_TRIANGLES,
        });
    }
    let vertices = triangles.saturating_mul(3);
    if vertices > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertices,
            max: MAX_VERTICES,
        });
    }
    Ok(())
}
