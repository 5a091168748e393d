//! # Triangle Sketches
//!
//! Sketches drawn directly on the triangular grid, plus the free-floating
//! triangle chain.

use crate::circles::edge_walk;
use crate::random::pick;
use crate::Sketch;
use rand::RngCore;
use tracing::debug;
use trigrid::canvas::{self, Canvas2d};
use trigrid::{
    Color, CompositeOp, CoordMode, GridCell, GridRange, ImageSource, Point, Rect, Triangle,
    TriangleMesh,
};

// =============================================================================
// TRIANGLE GRID
// =============================================================================

/// Twelve colored triangles on a radius-60 grid, blended with `darken`.
#[derive(Debug, Clone)]
pub struct TriangleGrid {
    width: f64,
    height: f64,
    mesh: TriangleMesh,
}

impl TriangleGrid {
    /// Circumradius of the grid.
    pub const RADIUS: f64 = 60.0;

    /// Cells and their colors, in draw order.
    pub const CELLS: [(GridCell, Color); 12] = [
        (GridCell::new(1, 1), Color::BLACK),
        (GridCell::new(2, 1), Color::CYAN),
        (GridCell::new(3, 1), Color::MAGENTA),
        (GridCell::new(4, 1), Color::GRAY),
        (GridCell::new(5, 1), Color::PINK),
        (GridCell::new(1, 2), Color::BLACK),
        (GridCell::new(2, 2), Color::RED),
        (GridCell::new(3, 2), Color::MAGENTA),
        (GridCell::new(4, 2), Color::RED),
        (GridCell::new(5, 2), Color::PINK),
        (GridCell::new(2, 3), Color::YELLOW),
        (GridCell::new(2, 4), Color::BLUE),
    ];

    /// Creates the sketch for a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            mesh: TriangleMesh::new(Self::RADIUS, CoordMode::Pixel),
        }
    }
}

impl Sketch for TriangleGrid {
    fn setup(&mut self, _rng: &mut dyn RngCore) {}

    fn update(&mut self) {}

    fn draw(&self, canvas: &mut dyn Canvas2d) {
        canvas::clear(canvas, self.width, self.height, Color::WHITE);
        canvas.save();
        canvas.set_composite(CompositeOp::Darken);
        for (cell, color) in Self::CELLS {
            canvas::fill_triangle(canvas, &self.mesh.triangle(cell), color);
        }
        canvas.restore();
    }
}

// =============================================================================
// TRIANGLE TRANSFER
// =============================================================================

/// Image slices clipped into grid triangles above a band of random greys.
#[derive(Debug, Clone)]
pub struct TriangleTransfer {
    width: f64,
    height: f64,
    mesh: TriangleMesh,
    image: ImageSource,
    band: Vec<Color>,
}

impl TriangleTransfer {
    /// Default circumradius of the grid.
    pub const RADIUS: f64 = 30.0;
    /// Image rectangle copied into each transfer cell.
    pub const SOURCE: Rect = Rect {
        x: 200.0,
        y: 30.0,
        width: 300.0,
        height: 300.0,
    };
    /// Greys the band picks from.
    pub const GREYS: [Color; 4] = [
        Color::grey(0x00),
        Color::grey(0x33),
        Color::grey(0xAA),
        Color::grey(0xCC),
    ];

    /// Cells filled black along the diagonal.
    const DIAGONAL: [GridCell; 4] = [
        GridCell::new(0, 0),
        GridCell::new(1, 1),
        GridCell::new(2, 2),
        GridCell::new(3, 3),
    ];

    /// Creates the sketch for a canvas size and source image.
    pub fn new(width: f64, height: f64, image: ImageSource) -> Self {
        Self {
            width,
            height,
            mesh: TriangleMesh::new(Self::RADIUS, CoordMode::Pixel),
            image,
            band: Vec::new(),
        }
    }

    /// Rows and columns of the grey band.
    pub fn band_range() -> GridRange {
        GridRange::new(5..100, 0..15)
    }

    /// Colors chosen for the band, row-major.
    pub fn band(&self) -> &[Color] {
        &self.band
    }
}

impl Sketch for TriangleTransfer {
    fn setup(&mut self, rng: &mut dyn RngCore) {
        let cells = Self::band_range().len();
        self.band = (0..cells)
            .filter_map(|_| pick(rng, &Self::GREYS).copied())
            .collect();
        debug!(band = self.band.len(), "triangle transfer set up");
    }

    fn update(&mut self) {}

    fn draw(&self, canvas: &mut dyn Canvas2d) {
        canvas::clear(canvas, self.width, self.height, Color::WHITE);

        for cell in Self::DIAGONAL {
            canvas::fill_triangle(canvas, &self.mesh.triangle(cell), Color::BLACK);
        }

        canvas::transfer_image(
            canvas,
            &self.mesh.triangle_at(1, 0),
            &self.image,
            Self::SOURCE,
        );
        canvas::fill_triangle(canvas, &self.mesh.triangle_at(1, 3), Color::RED);
        canvas::transfer_image(
            canvas,
            &self.mesh.triangle_at(1, 1),
            &self.image,
            Self::SOURCE,
        );

        let mut colors = self.band.iter().copied();
        canvas::draw_grid(canvas, &self.mesh, Self::band_range(), |_, _| colors.next());
    }
}

// =============================================================================
// TRIANGLE OVERLAP
// =============================================================================

/// A chain of cyan triangle outlines, each centered on the circumcircle of
/// the previous one.
#[derive(Debug, Clone, Default)]
pub struct TriangleOverlap {
    width: f64,
    height: f64,
    triangles: Vec<Triangle>,
}

impl TriangleOverlap {
    /// Number of triangles in the chain.
    pub const COUNT: usize = 4000;

    /// Creates the sketch for a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            triangles: Vec::new(),
        }
    }

    /// The chain, in draw order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

impl Sketch for TriangleOverlap {
    fn setup(&mut self, rng: &mut dyn RngCore) {
        self.triangles = edge_walk(rng, Self::COUNT, Point::new(150.0, 150.0), 30.0, (10.0, 20.0))
            .into_iter()
            // Vertex 0 points right, as the chain was first drawn
            .map(|(center, radius)| Triangle::new(center, radius, 0.0, CoordMode::Continuous))
            .collect();
        debug!(triangles = self.triangles.len(), "triangle overlap set up");
    }

    fn update(&mut self) {}

    fn draw(&self, canvas: &mut dyn Canvas2d) {
        canvas::clear(canvas, self.width, self.height, Color::BLACK);
        canvas.set_stroke_style(Color::CYAN);
        canvas.set_line_width(1.0);
        for triangle in &self.triangles {
            canvas::trace_triangle(canvas, triangle);
            canvas.stroke();
        }
    }
}
