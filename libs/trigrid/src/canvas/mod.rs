//! # 2D Canvas Consumer
//!
//! The drawing surface the grid feeds: an object-safe trait shaped after the
//! browser `CanvasRenderingContext2D` calls the sketches make, plus helpers
//! that trace, fill and image-clip grid triangles.
//!
//! ## Data Flow
//!
//! ```text
//! TriangleMesh → Triangle → trace_triangle / fill_triangle / transfer_image
//!                                  ↓
//!                             dyn Canvas2d (browser context, CommandRecorder)
//! ```

mod recorder;
mod style;

pub use recorder::{CommandRecorder, DrawCommand};
pub use style::{Color, CompositeOp, ImageSource};

use crate::grid::TriangleMesh;
use crate::range::{GridCell, GridRange};
use crate::triangle::{Point, Rect, Triangle};

/// Line width used when outlining filled triangles; covers the seam left by
/// rounding shared vertices independently.
pub const SEAM_LINE_WIDTH: f64 = 1.0;

/// A 2D drawing surface.
///
/// Methods mirror the canvas API one to one so a browser binding is a thin
/// forwarding layer. Paths are implicit state, as on a real canvas.
pub trait Canvas2d {
    /// Pushes the current drawing state (styles, clip, composite).
    fn save(&mut self);
    /// Pops the drawing state pushed by the matching [`Canvas2d::save`].
    fn restore(&mut self);
    /// Starts a new path.
    fn begin_path(&mut self);
    /// Starts a sub-path at `point`.
    fn move_to(&mut self, point: Point);
    /// Adds a straight segment to `point`.
    fn line_to(&mut self, point: Point);
    /// Adds a cubic Bézier segment.
    fn bezier_curve_to(&mut self, control1: Point, control2: Point, end: Point);
    /// Adds a circular arc, angles in radians.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);
    /// Closes the current sub-path.
    fn close_path(&mut self);
    /// Fills the current path.
    fn fill(&mut self);
    /// Strokes the current path.
    fn stroke(&mut self);
    /// Intersects the clip region with the current path.
    fn clip(&mut self);
    /// Fills a rectangle with the fill style.
    fn fill_rect(&mut self, rect: Rect);
    /// Clears a rectangle to transparent.
    fn clear_rect(&mut self, rect: Rect);
    /// Sets the fill style.
    fn set_fill_style(&mut self, color: Color);
    /// Sets the stroke style.
    fn set_stroke_style(&mut self, color: Color);
    /// Sets the line width.
    fn set_line_width(&mut self, width: f64);
    /// Sets the compositing operation.
    fn set_composite(&mut self, op: CompositeOp);
    /// Draws the `src` rectangle of `image` scaled into `dst`.
    fn draw_image(&mut self, image: &ImageSource, src: Rect, dst: Rect);
}

/// Traces the triangle outline as a closed path: vertex 0, 1, 2.
///
/// Starts a new path; does not fill or stroke.
pub fn trace_triangle(canvas: &mut dyn Canvas2d, triangle: &Triangle) {
    let [a, b, c] = triangle.vertices();
    canvas.begin_path();
    canvas.move_to(a);
    canvas.line_to(b);
    canvas.line_to(c);
    canvas.close_path();
}

/// Fills and outlines a triangle in one color.
///
/// The outline hides hairline gaps between neighbours on the canvas.
/// Drawing state is saved and restored around the call.
pub fn fill_triangle(canvas: &mut dyn Canvas2d, triangle: &Triangle, color: Color) {
    canvas.save();
    canvas.set_fill_style(color);
    canvas.set_stroke_style(color);
    canvas.set_line_width(SEAM_LINE_WIDTH);
    trace_triangle(canvas, triangle);
    canvas.fill();
    canvas.stroke();
    canvas.restore();
}

/// Clips to `triangle` and paints the `src` rectangle of `image` into the
/// triangle's bounding box.
///
/// The clipped box is first filled white so `source-atop` has content to
/// draw onto. Drawing state is saved and restored around the call.
///
/// # Example
///
/// ```rust
/// use trigrid::{canvas, CommandRecorder, CoordMode, DrawCommand, ImageSource, Rect, TriangleMesh};
///
/// let mesh = TriangleMesh::new(30.0, CoordMode::Pixel);
/// let image = ImageSource::new(7, 640, 480);
/// let mut recorder = CommandRecorder::new();
/// canvas::transfer_image(&mut recorder, &mesh.triangle_at(1, 0), &image, Rect::new(200.0, 30.0, 300.0, 300.0));
///
/// assert!(recorder.commands().contains(&DrawCommand::Clip));
/// assert_eq!(recorder.count(|c| matches!(c, DrawCommand::DrawImage { .. })), 1);
/// ```
pub fn transfer_image(
    canvas: &mut dyn Canvas2d,
    triangle: &Triangle,
    image: &ImageSource,
    src: Rect,
) {
    let dst = triangle.bounding_box();

    canvas.save();
    canvas.set_fill_style(Color::WHITE);
    canvas.set_stroke_style(Color::WHITE);
    canvas.set_composite(CompositeOp::SourceAtop);
    trace_triangle(canvas, triangle);
    canvas.clip();
    canvas.fill_rect(dst);
    canvas.draw_image(image, src, dst);
    canvas.restore();
}

/// Fills every triangle of `range`, asking `style` for each cell's color.
///
/// Cells for which `style` returns `None` are skipped. Returns the number of
/// triangles drawn.
pub fn draw_grid<S>(
    canvas: &mut dyn Canvas2d,
    mesh: &TriangleMesh,
    range: GridRange,
    mut style: S,
) -> usize
where
    S: FnMut(GridCell, &Triangle) -> Option<Color>,
{
    let mut drawn = 0;
    for (cell, triangle) in mesh.triangles(range) {
        if let Some(color) = style(cell, &triangle) {
            fill_triangle(canvas, &triangle, color);
            drawn += 1;
        }
    }
    drawn
}

/// Fills the whole canvas area with one color.
pub fn clear(canvas: &mut dyn Canvas2d, width: f64, height: f64, color: Color) {
    let area = Rect::new(0.0, 0.0, width, height);
    canvas.save();
    canvas.clear_rect(area);
    canvas.set_fill_style(color);
    canvas.fill_rect(area);
    canvas.restore();
}

#[cfg(test)]
mod tests;
