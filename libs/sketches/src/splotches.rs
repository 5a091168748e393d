//! # Splotches
//!
//! Small clusters of additive-blended dots in cyan, yellow and magenta.

use crate::random::{between, edge_point};
use crate::Sketch;
use rand::RngCore;
use std::f64::consts::TAU;
use tracing::debug;
use trigrid::canvas;
use trigrid::{Canvas2d, Color, CompositeOp, Point};

/// Palette cycled through a splotch's dots.
pub const PALETTE: [Color; 3] = [Color::CYAN, Color::YELLOW, Color::MAGENTA];

/// A chain of equal dots, each centered on the edge of the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct Splotch {
    dots: Vec<Point>,
    dot_radius: f64,
}

impl Splotch {
    /// Dots per splotch.
    pub const DOTS: usize = 4;

    /// Grows a splotch of overall `size` from `origin`.
    pub fn new(rng: &mut dyn RngCore, origin: Point, size: f64) -> Self {
        let dot_radius = size / 3.0;
        let mut dots = Vec::with_capacity(Self::DOTS);
        let mut last = origin;
        dots.push(last);
        for _ in 1..Self::DOTS {
            last = edge_point(rng, last, dot_radius);
            dots.push(last);
        }
        Self { dots, dot_radius }
    }

    /// Dot centers in growth order.
    pub fn dots(&self) -> &[Point] {
        &self.dots
    }

    /// Radius shared by every dot.
    pub fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    /// Draws each dot with `lighter` compositing; the palette starts at its
    /// second entry.
    pub fn draw(&self, canvas: &mut dyn Canvas2d) {
        for (index, dot) in self.dots.iter().enumerate() {
            canvas.save();
            canvas.set_composite(CompositeOp::Lighter);
            canvas.set_fill_style(PALETTE[(index + 1) % PALETTE.len()]);
            canvas.begin_path();
            canvas.arc(*dot, self.dot_radius, 0.0, TAU);
            canvas.fill();
            canvas.restore();
        }
    }
}

/// One hundred splotches scattered over a black canvas.
#[derive(Debug, Clone, Default)]
pub struct Splotches {
    width: f64,
    height: f64,
    splotches: Vec<Splotch>,
}

impl Splotches {
    /// Number of splotches.
    pub const COUNT: usize = 100;

    /// Creates the sketch for a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            splotches: Vec::new(),
        }
    }

    /// The splotches in draw order.
    pub fn splotches(&self) -> &[Splotch] {
        &self.splotches
    }
}

impl Sketch for Splotches {
    fn setup(&mut self, rng: &mut dyn RngCore) {
        self.splotches = (0..Self::COUNT)
            .map(|_| {
                let origin = Point::new(between(rng, 0.0, self.width), between(rng, 0.0, self.height));
                let size = between(rng, 10.0, 30.0);
                Splotch::new(rng, origin, size)
            })
            .collect();
        debug!(splotches = self.splotches.len(), "splotches set up");
    }

    fn update(&mut self) {}

    fn draw(&self, canvas: &mut dyn Canvas2d) {
        canvas::clear(canvas, self.width, self.height, Color::BLACK);
        for splotch in &self.splotches {
            splotch.draw(canvas);
        }
    }
}
