//! # Triangular Grid
//!
//! Maps integer cells `(i, j)` to the triangles of a plane tiled with
//! alternating up/down equilateral triangles.
//!
//! ```text
//!  \ 0,0 /\ 0,2 /\
//!   \   /  \   /  \
//!    \ / 0,1\ / 0,3\
//!  ----------------
//!    / \ 1,1/ \ 1,3/
//!   /   \  /   \  /
//!  / 1,0 \/ 1,2 \/
//! ```
//!
//! Even rows start with an up triangle, odd rows with a down one; every
//! other row pair is shifted by half a triangle, which is why the mapping is
//! piecewise rather than a single affine transform of `(i, j)`.

use crate::range::{GridCell, GridRange};
use crate::triangle::{CoordMode, Orientation, Point, Triangle};
use config::constants::{GridConfig, SQRT_3_OVER_2};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Coordinate engine for a triangular grid.
///
/// Holds only its construction parameters; every query is a pure function of
/// them, so a `TriangleMesh` can be shared freely across threads.
///
/// # Preconditions
///
/// `radius` must be finite and positive. This is not checked: a bad radius
/// yields meaningless geometry rather than an error. Use
/// [`TriangleMesh::from_config`] with a validated [`GridConfig`] when the
/// radius comes from outside.
///
/// # Example
///
/// ```rust
/// use trigrid::{CoordMode, Point, TriangleMesh};
///
/// let mesh = TriangleMesh::new(60.0, CoordMode::Pixel);
/// assert_eq!(mesh.center(1, 1), Point::new(52.0, 120.0));
///
/// let tri = mesh.triangle_at(1, 1);
/// assert_eq!(tri.vertices()[0], Point::new(52.0, 60.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    radius: f64,
    origin: DVec2,
    mode: CoordMode,
}

impl TriangleMesh {
    /// Creates a grid anchored at the origin.
    pub fn new(radius: f64, mode: CoordMode) -> Self {
        Self::with_origin(radius, DVec2::ZERO, mode)
    }

    /// Creates a grid whose centers are all offset by `origin`.
    pub fn with_origin(radius: f64, origin: DVec2, mode: CoordMode) -> Self {
        Self {
            radius,
            origin,
            mode,
        }
    }

    /// Creates a grid from validated configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::GridConfig;
    /// use trigrid::{CoordMode, TriangleMesh};
    ///
    /// let cfg = GridConfig::new(10.0, 100.0, 50.0, false).unwrap();
    /// let mesh = TriangleMesh::from_config(&cfg);
    /// assert_eq!(mesh.mode(), CoordMode::Continuous);
    /// assert_eq!(mesh.radius(), 10.0);
    /// ```
    pub fn from_config(config: &GridConfig) -> Self {
        Self::with_origin(
            config.radius,
            DVec2::new(config.origin_x, config.origin_y),
            CoordMode::from_snap(config.pixel_snap),
        )
    }

    /// Circumradius of every triangle.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Offset added to every center.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pixel or continuous coordinates.
    #[inline]
    pub fn mode(&self) -> CoordMode {
        self.mode
    }

    /// Same grid reporting coordinates in `mode`.
    pub fn with_mode(self, mode: CoordMode) -> Self {
        Self { mode, ..self }
    }

    /// Horizontal distance between neighbouring centers, `(√3/2)·radius`.
    #[inline]
    pub fn dx(&self) -> f64 {
        SQRT_3_OVER_2 * self.radius
    }

    /// Half the radius; vertical positions are multiples of it.
    #[inline]
    pub fn dy(&self) -> f64 {
        self.radius / 2.0
    }

    /// Center of the triangle at cell `(i, j)`.
    ///
    /// Rows come in pairs six half-radii tall: within a pair the second row
    /// sits four half-radii below the first, and the next pair starts two
    /// half-radii further down. Even columns then shift by one half-radius
    /// (down on even rows, up on odd rows) because their triangles point the
    /// other way; odd columns are left alone.
    ///
    /// Defined for every `i32` pair; the lattice arithmetic runs in `f64`.
    pub fn center(&self, i: i32, j: i32) -> Point {
        let (dx, dy) = (self.dx(), self.dy());
        let row = i.div_euclid(2);

        let x = f64::from(j) * dx;
        let mut y = (4.0 * f64::from(i) - 2.0 * f64::from(row)) * dy;

        let i_even = i.rem_euclid(2) == 0;
        let j_even = j.rem_euclid(2) == 0;
        if i_even && j_even {
            y += dy;
        } else if j_even {
            y -= dy;
        }

        self.mode.snap(self.origin + DVec2::new(x, y))
    }

    /// Rotation of vertex 0 for cell `(i, j)`: `+π/2` when `i + j` is odd,
    /// `-π/2` otherwise.
    pub fn orientation_theta(&self, i: i32, j: i32) -> f64 {
        self.orientation(i, j).theta()
    }

    /// Up or down for cell `(i, j)`; alternates like a checkerboard.
    pub fn orientation(&self, i: i32, j: i32) -> Orientation {
        if (i.rem_euclid(2) + j.rem_euclid(2)) % 2 == 1 {
            Orientation::Down
        } else {
            Orientation::Up
        }
    }

    /// The triangle at cell `(i, j)`.
    pub fn triangle_at(&self, i: i32, j: i32) -> Triangle {
        Triangle::new(
            self.center(i, j),
            self.radius,
            self.orientation_theta(i, j),
            self.mode,
        )
    }

    /// Triangle for a [`GridCell`].
    #[inline]
    pub fn triangle(&self, cell: GridCell) -> Triangle {
        self.triangle_at(cell.i, cell.j)
    }

    /// Vertices of `triangle`, in the fixed k = 0, 1, 2 order.
    #[inline]
    pub fn vertices(&self, triangle: &Triangle) -> [Point; 3] {
        triangle.vertices()
    }

    /// Bounding box of `triangle`, computed from its vertices.
    #[inline]
    pub fn bounding_box(&self, triangle: &Triangle) -> crate::triangle::Rect {
        triangle.bounding_box()
    }

    /// Every triangle in `range`, row-major.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trigrid::{CoordMode, GridRange, TriangleMesh};
    ///
    /// let mesh = TriangleMesh::new(20.0, CoordMode::Pixel);
    /// let count = mesh.triangles(GridRange::new(0..3, 0..4)).count();
    /// assert_eq!(count, 12);
    /// ```
    pub fn triangles(&self, range: GridRange) -> impl Iterator<Item = (GridCell, Triangle)> + '_ {
        range.cells().map(move |cell| (cell, self.triangle(cell)))
    }

    /// The cell whose triangle contains `point`.
    ///
    /// Points on a shared edge resolve to the first candidate in row-major
    /// order. Containment is tested on continuous geometry regardless of the
    /// grid's mode, so pixel rounding cannot leave holes. Points beyond the
    /// `i32` lattice clamp to its edge cells.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trigrid::{CoordMode, TriangleMesh};
    ///
    /// let mesh = TriangleMesh::new(60.0, CoordMode::Continuous);
    /// let center = mesh.center(3, -2);
    /// let cell = mesh.cell_at(center);
    /// assert_eq!((cell.i, cell.j), (3, -2));
    /// ```
    pub fn cell_at(&self, point: Point) -> GridCell {
        let continuous = self.with_mode(CoordMode::Continuous);
        let local = point - self.origin;

        // Each row pair spans 6·dy vertically; columns are dx apart.
        // `as` saturates, so far-away points land on the lattice edge.
        let j_guess = (local.x / self.dx()).round() as i32;
        let pair = (local.y / (6.0 * self.dy())).floor() as i32;
        let i_guess = pair.saturating_mul(2);

        let candidates = GridRange::new(
            i_guess.saturating_sub(1)..i_guess.saturating_add(3),
            j_guess.saturating_sub(1)..j_guess.saturating_add(2),
        );
        candidates
            .cells()
            .find(|cell| continuous.triangle(*cell).contains(point))
            .unwrap_or(GridCell::new(i_guess, j_guess))
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

#[cfg(test)]
mod tests;
