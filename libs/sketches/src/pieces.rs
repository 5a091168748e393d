//! # Image Pieces
//!
//! The canvas cut into a rectangular grid, each cell showing a random slice
//! of an image tinted with `lighten`. Two tinted grids are stacked with
//! `darken`.

use crate::random::between;
use crate::Sketch;
use rand::RngCore;
use tracing::debug;
use trigrid::canvas;
use trigrid::{Canvas2d, Color, CompositeOp, ImageSource, Rect};

/// Side of the square slice taken from the image for every piece.
pub const SLICE: f64 = 100.0;

/// One cell: where it goes, what part of the image it shows, its tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    /// Destination on the canvas
    pub dst: Rect,
    /// Source rectangle in the image
    pub src: Rect,
    /// Tint drawn over the slice
    pub color: Color,
}

impl Piece {
    /// Draws the slice, then the tint with `lighten`.
    pub fn draw(&self, canvas: &mut dyn Canvas2d, image: &ImageSource) {
        canvas.save();
        canvas.draw_image(image, self.src, self.dst);
        canvas.set_composite(CompositeOp::Lighten);
        canvas.set_fill_style(self.color);
        canvas.fill_rect(self.dst);
        canvas.restore();
    }
}

/// A `columns × rows` grid of tinted pieces covering the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceGrid {
    pieces: Vec<Piece>,
}

impl PieceGrid {
    /// Cuts a `width × height` canvas into pieces, each showing a random
    /// slice of `image`.
    pub fn new(
        rng: &mut dyn RngCore,
        image: &ImageSource,
        size: (usize, usize),
        canvas_size: (f64, f64),
        color: Color,
    ) -> Self {
        let (columns, rows) = size;
        let w = canvas_size.0 / columns as f64;
        let h = canvas_size.1 / rows as f64;

        let mut pieces = Vec::with_capacity(columns * rows);
        for x in 0..columns {
            for y in 0..rows {
                pieces.push(Piece {
                    dst: Rect::new(x as f64 * w, y as f64 * h, w, h),
                    src: random_slice(rng, image, SLICE, SLICE),
                    color,
                });
            }
        }
        Self { pieces }
    }

    /// Pieces, column-major.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Draws every piece.
    pub fn draw(&self, canvas: &mut dyn Canvas2d, image: &ImageSource) {
        for piece in &self.pieces {
            piece.draw(canvas, image);
        }
    }
}

/// A `w × h` rectangle at a random whole-pixel offset inside `image`.
///
/// Images smaller than the slice yield a slice anchored at the origin.
pub fn random_slice(rng: &mut dyn RngCore, image: &ImageSource, w: f64, h: f64) -> Rect {
    let max_x = (f64::from(image.width) - w).max(0.0);
    let max_y = (f64::from(image.height) - h).max(0.0);
    Rect::new(
        between(rng, 0.0, max_x).floor(),
        between(rng, 0.0, max_y).floor(),
        w,
        h,
    )
}

/// Red and blue tinted piece grids over one image.
#[derive(Debug, Clone)]
pub struct ImagePieces {
    width: f64,
    height: f64,
    image: ImageSource,
    grids: Vec<PieceGrid>,
}

impl ImagePieces {
    /// Pieces per side.
    pub const DIVISIONS: usize = 6;

    /// Creates the sketch for a canvas size and source image.
    pub fn new(width: f64, height: f64, image: ImageSource) -> Self {
        Self {
            width,
            height,
            image,
            grids: Vec::new(),
        }
    }

    /// The grids in draw order.
    pub fn grids(&self) -> &[PieceGrid] {
        &self.grids
    }
}

impl Sketch for ImagePieces {
    fn setup(&mut self, rng: &mut dyn RngCore) {
        let size = (Self::DIVISIONS, Self::DIVISIONS);
        let canvas_size = (self.width, self.height);
        self.grids = [Color::RED, Color::BLUE]
            .into_iter()
            .map(|color| PieceGrid::new(rng, &self.image, size, canvas_size, color))
            .collect();
        debug!(grids = self.grids.len(), "image pieces set up");
    }

    fn update(&mut self) {}

    fn draw(&self, canvas: &mut dyn Canvas2d) {
        canvas::clear(canvas, self.width, self.height, Color::WHITE);
        canvas.save();
        canvas.set_composite(CompositeOp::Darken);
        for grid in &self.grids {
            grid.draw(canvas, &self.image);
        }
        canvas.restore();
    }
}
