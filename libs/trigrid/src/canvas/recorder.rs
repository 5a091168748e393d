//! Recording canvas: turns [`Canvas2d`] calls into serializable commands a
//! JavaScript host can replay against a real context.

use super::{Canvas2d, Color, CompositeOp, ImageSource};
use crate::triangle::{Point, Rect};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// One recorded canvas call.
///
/// Serialized with an `op` tag, e.g. `{"op":"moveTo","to":[52.0,60.0]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum DrawCommand {
    Save,
    Restore,
    BeginPath,
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    BezierCurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    },
    ClosePath,
    Fill,
    Stroke,
    Clip,
    FillRect {
        rect: Rect,
    },
    ClearRect {
        rect: Rect,
    },
    SetFillStyle {
        color: Color,
    },
    SetStrokeStyle {
        color: Color,
    },
    SetLineWidth {
        width: f64,
    },
    SetComposite {
        mode: CompositeOp,
    },
    DrawImage {
        image: ImageSource,
        src: Rect,
        dst: Rect,
    },
}

/// A [`Canvas2d`] that records every call in order.
///
/// # Example
///
/// ```rust
/// use trigrid::{canvas, CommandRecorder, CoordMode, DrawCommand, TriangleMesh};
///
/// let mesh = TriangleMesh::new(10.0, CoordMode::Pixel);
/// let mut recorder = CommandRecorder::new();
/// canvas::trace_triangle(&mut recorder, &mesh.triangle_at(0, 0));
///
/// assert_eq!(recorder.commands()[0], DrawCommand::BeginPath);
/// assert_eq!(recorder.len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
    depth: usize,
}

impl CommandRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Consumes the recorder, returning its commands.
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of commands matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Current `save` nesting depth; zero when every save was restored.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Drops all recorded commands.
    pub fn clear(&mut self) {
        trace!(dropped = self.commands.len(), "clearing recorded commands");
        self.commands.clear();
        self.depth = 0;
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Canvas2d for CommandRecorder {
    fn save(&mut self) {
        self.depth += 1;
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // An unbalanced restore is a no-op on a real canvas
        self.depth = self.depth.saturating_sub(1);
        self.push(DrawCommand::Restore);
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, to: Point) {
        self.push(DrawCommand::MoveTo { to });
    }

    fn line_to(&mut self, to: Point) {
        self.push(DrawCommand::LineTo { to });
    }

    fn bezier_curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.push(DrawCommand::BezierCurveTo {
            control1,
            control2,
            end,
        });
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn clip(&mut self) {
        self.push(DrawCommand::Clip);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.push(DrawCommand::FillRect { rect });
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.push(DrawCommand::ClearRect { rect });
    }

    fn set_fill_style(&mut self, color: Color) {
        self.push(DrawCommand::SetFillStyle { color });
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.push(DrawCommand::SetStrokeStyle { color });
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::SetLineWidth { width });
    }

    fn set_composite(&mut self, mode: CompositeOp) {
        self.push(DrawCommand::SetComposite { mode });
    }

    fn draw_image(&mut self, image: &ImageSource, src: Rect, dst: Rect) {
        self.push(DrawCommand::DrawImage {
            image: *image,
            src,
            dst,
        });
    }
}
