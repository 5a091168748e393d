//! # Circle Sketches
//!
//! Two offset dot grids blended with `darken`, and a chain of overlapping
//! circle outlines.

use crate::random::{between, edge_point};
use crate::Sketch;
use rand::{Rng, RngCore};
use std::f64::consts::{PI, TAU};
use tracing::debug;
use trigrid::canvas;
use trigrid::{Canvas2d, Color, CompositeOp, Point};

/// A chain of shapes, each centered on the outline of the one before.
///
/// The first shape sits at `start` with `start_radius`; every later radius
/// is drawn from `radii`.
pub fn edge_walk(
    rng: &mut dyn RngCore,
    count: usize,
    start: Point,
    start_radius: f64,
    radii: (f64, f64),
) -> Vec<(Point, f64)> {
    let mut chain = Vec::with_capacity(count);
    let mut last = (start, start_radius);
    for index in 0..count {
        if index > 0 {
            let center = edge_point(rng, last.0, last.1);
            last = (center, between(rng, radii.0, radii.1));
        }
        chain.push(last);
    }
    chain
}

// =============================================================================
// CIRCLE GRID
// =============================================================================

/// A square grid of dots with every other column shifted half a step,
/// rotated about its center.
#[derive(Debug, Clone, PartialEq)]
pub struct DotGrid {
    dots: Vec<Point>,
    radius: f64,
    color: Color,
}

impl DotGrid {
    /// Gap added between neighbouring dots on top of their diameters.
    pub const GAP: f64 = 10.0;

    /// Builds `(2·size + 1)²` dots of `radius` around `center`, rotated by
    /// `theta`.
    pub fn new(center: Point, radius: f64, size: usize, color: Color, theta: f64) -> Self {
        let side = 2 * size + 1;
        let step = 2.0 * radius + Self::GAP;
        let rotation = Point::from_angle(theta);
        let half = size as f64;

        let mut dots = Vec::with_capacity(side * side);
        for i in 0..side {
            for j in 0..side {
                let mut u = i as f64 - half;
                let v = j as f64 - half;
                if j % 2 == 1 {
                    u += 0.5;
                }
                dots.push(center + rotation.rotate(Point::new(u, v) * step));
            }
        }

        Self {
            dots,
            radius,
            color,
        }
    }

    /// Dot centers, row-major.
    pub fn dots(&self) -> &[Point] {
        &self.dots
    }

    /// Fills every dot.
    pub fn draw(&self, canvas: &mut dyn Canvas2d) {
        canvas.save();
        canvas.set_fill_style(self.color);
        for dot in &self.dots {
            canvas.begin_path();
            canvas.arc(*dot, self.radius, 0.0, TAU);
            canvas.fill();
        }
        canvas.restore();
    }
}

/// Red and cyan dot grids on a shared random center, the cyan one turned by
/// a small random angle so the two interfere.
#[derive(Debug, Clone, Default)]
pub struct CircleGrid {
    width: f64,
    height: f64,
    grids: Vec<DotGrid>,
}

impl CircleGrid {
    /// Dots from the center to the edge of each grid.
    pub const SIZE: usize = 29;
    /// First grid color.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Second grid color.
    pub const CYAN: Color = Color::rgb(0, 200, 255);

    /// Creates the sketch for a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            grids: Vec::new(),
        }
    }

    /// The two grids, in draw order.
    pub fn grids(&self) -> &[DotGrid] {
        &self.grids
    }
}

impl Sketch for CircleGrid {
    fn setup(&mut self, rng: &mut dyn RngCore) {
        let center = Point::new(
            (self.width * rng.gen::<f64>()).floor(),
            (self.height * rng.gen::<f64>()).floor(),
        );
        let radius = between(rng, 15.0, 45.0).floor();
        let theta = between(rng, -PI / 20.0, 0.0);

        self.grids = vec![
            DotGrid::new(center, radius, Self::SIZE, Self::RED, 0.0),
            DotGrid::new(center, radius, Self::SIZE, Self::CYAN, theta),
        ];
        debug!(radius, theta, "circle grid set up");
    }

    fn update(&mut self) {}

    fn draw(&self, canvas: &mut dyn Canvas2d) {
        canvas::clear(canvas, self.width, self.height, Color::WHITE);
        canvas.save();
        canvas.set_composite(CompositeOp::Darken);
        for grid in &self.grids {
            grid.draw(canvas);
        }
        canvas.restore();
    }
}

// =============================================================================
// CIRCLE OVERLAP
// =============================================================================

/// Thousands of thin white circles, each centered on the previous one's
/// outline, on black.
#[derive(Debug, Clone, Default)]
pub struct CircleOverlap {
    width: f64,
    height: f64,
    circles: Vec<(Point, f64)>,
}

impl CircleOverlap {
    /// Number of circles in the chain.
    pub const COUNT: usize = 4000;
    /// Where the chain starts.
    pub const START: Point = Point::new(150.0, 150.0);
    /// Radius of the first circle.
    pub const START_RADIUS: f64 = 30.0;

    /// Creates the sketch for a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            circles: Vec::new(),
        }
    }

    /// Centers and radii in chain order.
    pub fn circles(&self) -> &[(Point, f64)] {
        &self.circles
    }
}

impl Sketch for CircleOverlap {
    fn setup(&mut self, rng: &mut dyn RngCore) {
        self.circles = edge_walk(rng, Self::COUNT, Self::START, Self::START_RADIUS, (10.0, 20.0));
        debug!(circles = self.circles.len(), "circle overlap set up");
    }

    fn update(&mut self) {}

    fn draw(&self, canvas: &mut dyn Canvas2d) {
        canvas::clear(canvas, self.width, self.height, Color::BLACK);
        canvas.set_stroke_style(Color::WHITE);
        canvas.set_line_width(1.0);
        for (center, radius) in &self.circles {
            canvas.begin_path();
            canvas.arc(*center, *radius, 0.0, TAU);
            canvas.stroke();
        }
    }
}
