//! # Drips
//!
//! Horizontal white lines, each with a smooth black dip hanging from it.
//! Two layouts: [`Drips`] (five large dips) and [`DipLines`] (a stack of
//! lines every 30px whose dips wander down the canvas).

use crate::random::between;
use crate::Sketch;
use rand::RngCore;
use tracing::debug;
use trigrid::canvas;
use trigrid::{Canvas2d, Color, Point};

/// Stroke width of the baseline and dip outline.
const LINE_WIDTH: f64 = 4.5;
/// Stroke width set while filling the dip body.
const FILL_LINE_WIDTH: f64 = 2.5;

/// A horizontal line at `top` with a dip reaching down to `bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipLine {
    /// Baseline height
    pub top: f64,
    /// Lowest point of the dip
    pub bottom: f64,
    /// Width of the dip opening
    pub width: f64,
    /// Horizontal center of the dip
    pub mid: f64,
}

impl DipLine {
    /// Creates a line.
    pub fn new(top: f64, bottom: f64, width: f64, mid: f64) -> Self {
        Self {
            top,
            bottom,
            width,
            mid,
        }
    }

    /// Half the opening, floored to a whole pixel.
    fn half_width(&self) -> f64 {
        (self.width / 2.0).floor()
    }

    /// Adds the dip to the current path: down from the left edge of the
    /// opening to the bottom, then back up to the right edge.
    pub fn trace_dip(&self, canvas: &mut dyn Canvas2d) {
        let d = self.half_width();
        let left = Point::new(self.mid - d, self.top);
        let bottom = Point::new(self.mid, self.bottom);
        let right = Point::new(self.mid + d, self.top);

        canvas.move_to(left);
        s_curve_to(canvas, left, bottom);
        s_curve_to(canvas, bottom, right);
    }

    /// Fills the dip black, then strokes the baseline and dip outline white
    /// across `canvas_width`.
    pub fn draw(&self, canvas: &mut dyn Canvas2d, canvas_width: f64) {
        let d = self.half_width();

        canvas.save();
        canvas.begin_path();
        self.trace_dip(canvas);
        canvas.close_path();
        canvas.set_fill_style(Color::BLACK);
        canvas.set_stroke_style(Color::WHITE);
        canvas.set_line_width(FILL_LINE_WIDTH);
        canvas.fill();
        canvas.restore();

        canvas.begin_path();

        canvas.save();
        canvas.move_to(Point::new(0.0, self.top));
        canvas.line_to(Point::new(self.mid - d, self.top));
        canvas.move_to(Point::new(self.mid + d, self.top));
        canvas.line_to(Point::new(canvas_width, self.top));
        self.trace_dip(canvas);
        canvas.set_stroke_style(Color::WHITE);
        canvas.set_line_width(LINE_WIDTH);
        canvas.stroke();
        canvas.restore();
    }
}

/// Cubic S-curve from `from` to `to` with both control points on the
/// vertical through the floored horizontal midpoint.
pub fn s_curve_to(canvas: &mut dyn Canvas2d, from: Point, to: Point) {
    let x_mid = from.x + ((to.x - from.x) / 2.0).floor();
    canvas.bezier_curve_to(Point::new(x_mid, from.y), Point::new(x_mid, to.y), to);
}

fn draw_lines(lines: &[DipLine], canvas: &mut dyn Canvas2d, width: f64, height: f64) {
    canvas::clear(canvas, width, height, Color::BLACK);
    for line in lines {
        line.draw(canvas, width);
    }
}

// =============================================================================
// DRIPS
// =============================================================================

/// Five large dips stacked from 300px down, drawn back to front.
#[derive(Debug, Clone, Default)]
pub struct Drips {
    width: f64,
    height: f64,
    lines: Vec<DipLine>,
}

impl Drips {
    /// Number of dips.
    pub const COUNT: usize = 5;

    /// Creates the sketch for a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            lines: Vec::new(),
        }
    }

    /// The dips, in draw order.
    pub fn lines(&self) -> &[DipLine] {
        &self.lines
    }
}

impl Sketch for Drips {
    fn setup(&mut self, rng: &mut dyn RngCore) {
        self.lines.clear();
        for k in 0..Self::COUNT {
            let k = k as f64;
            let line = DipLine::new(
                300.0 + 40.0 * k,
                500.0 + 80.0 * k + between(rng, 0.0, 20.0),
                70.0 + 40.0 * k + between(rng, -30.0, 80.0),
                450.0 + between(rng, -100.0, 100.0),
            );
            // Lower lines are drawn first so upper dips overlap them
            self.lines.insert(0, line);
        }
        debug!(lines = self.lines.len(), "drips set up");
    }

    fn update(&mut self) {}

    fn draw(&self, canvas: &mut dyn Canvas2d) {
        draw_lines(&self.lines, canvas, self.width, self.height);
    }
}

// =============================================================================
// DIP LINES
// =============================================================================

/// Lines every 30px from just above the canvas to its bottom edge; each
/// dip's depth, width and center drift from the previous line.
#[derive(Debug, Clone, Default)]
pub struct DipLines {
    width: f64,
    height: f64,
    lines: Vec<DipLine>,
}

impl DipLines {
    /// Vertical distance between baselines.
    pub const SPACING: f64 = 30.0;
    /// Narrowest dip opening.
    pub const MIN_WIDTH: f64 = 70.0;

    /// Creates the sketch for a canvas size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            lines: Vec::new(),
        }
    }

    /// The lines, in draw order (bottom line first).
    pub fn lines(&self) -> &[DipLine] {
        &self.lines
    }
}

impl Sketch for DipLines {
    fn setup(&mut self, rng: &mut dyn RngCore) {
        self.lines.clear();

        let mut top = -10.0;
        let mut bottom = top + between(rng, 90.0, 210.0);
        let mut center = 400.0;
        let mut width = 200.0;

        while top < self.height {
            self.lines.insert(0, DipLine::new(top, bottom, width, center));
            top += Self::SPACING;
            bottom = f64::max(top, bottom + Self::SPACING + between(rng, -10.0, 10.0));
            width = f64::max(Self::MIN_WIDTH, width + between(rng, -20.0, 20.0));
            center += between(rng, -10.0, 10.0);
        }
        debug!(lines = self.lines.len(), "dip lines set up");
    }

    fn update(&mut self) {}

    fn draw(&self, canvas: &mut dyn Canvas2d) {
        draw_lines(&self.lines, canvas, self.width, self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use trigrid::{CommandRecorder, DrawCommand};

    #[test]
    fn test_s_curve_controls_on_mid_vertical() {
        let mut canvas = CommandRecorder::new();
        s_curve_to(&mut canvas, Point::new(10.0, 0.0), Point::new(15.0, 40.0));
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::BezierCurveTo {
                control1: Point::new(12.0, 0.0),
                control2: Point::new(12.0, 40.0),
                end: Point::new(15.0, 40.0),
            }]
        );
    }

    #[test]
    fn test_drips_parameters_in_range() {
        let mut sketch = Drips::new(1000.0, 1000.0);
        sketch.setup(&mut StdRng::seed_from_u64(11));
        assert_eq!(sketch.lines().len(), Drips::COUNT);

        // Stored back to front: the last line has k = 0
        for (k, line) in sketch.lines().iter().rev().enumerate() {
            let k = k as f64;
            assert_eq!(line.top, 300.0 + 40.0 * k);
            assert!((500.0 + 80.0 * k..520.0 + 80.0 * k).contains(&line.bottom));
            assert!((40.0 + 40.0 * k..150.0 + 40.0 * k).contains(&line.width));
            assert!((350.0..550.0).contains(&line.mid));
        }
    }

    #[test]
    fn test_dip_lines_cover_canvas() {
        let mut sketch = DipLines::new(800.0, 600.0);
        sketch.setup(&mut StdRng::seed_from_u64(5));
        let lines = sketch.lines();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines.last().map(|l| l.top), Some(-10.0));
        for line in lines {
            assert!(line.width >= DipLines::MIN_WIDTH);
            assert!(line.bottom >= line.top);
        }
    }

    #[test]
    fn test_dip_line_draw_is_balanced() {
        let mut canvas = CommandRecorder::new();
        DipLine::new(300.0, 500.0, 100.0, 450.0).draw(&mut canvas, 1000.0);
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.count(|c| *c == DrawCommand::Fill), 1);
        assert_eq!(canvas.count(|c| *c == DrawCommand::Stroke), 1);
        assert_eq!(
            canvas.count(|c| matches!(c, DrawCommand::BezierCurveTo { .. })),
            4
        );
    }
}
