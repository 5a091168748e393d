//! # Sketches
//!
//! Seeded generative drawings on top of [`trigrid`].
//!
//! Every sketch follows the same three-step contract: `setup` once with a
//! random number generator, then `update` and `draw` per frame. Sketches
//! own their state; the canvas is only borrowed while drawing.
//!
//! ## Usage
//!
//! ```rust
//! use sketches::{run, SketchKind};
//! use trigrid::CommandRecorder;
//!
//! let mut sketch = SketchKind::TriangleGrid.build(600, 600);
//! let mut canvas = CommandRecorder::new();
//! run(sketch.as_mut(), 42, 1, &mut canvas);
//! assert!(!canvas.is_empty());
//! ```

pub mod circles;
pub mod drips;
pub mod error;
pub mod heightfield;
pub mod kind;
pub mod pieces;
pub mod random;
pub mod splotches;
pub mod triangles;

pub use error::SketchError;
pub use kind::SketchKind;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;
use trigrid::Canvas2d;

/// A generative drawing.
///
/// `setup` is called exactly once before the first frame and is the only
/// place randomness may be drawn from.
pub trait Sketch {
    /// Builds the initial state.
    fn setup(&mut self, rng: &mut dyn RngCore);

    /// Advances state by one frame. Most sketches are static.
    fn update(&mut self);

    /// Draws the current state.
    fn draw(&self, canvas: &mut dyn Canvas2d);
}

/// Runs `sketch` for `frames` frames against `canvas`, seeding its RNG with
/// `seed`.
///
/// Zero frames still performs setup but draws nothing.
pub fn run(sketch: &mut dyn Sketch, seed: u64, frames: usize, canvas: &mut dyn Canvas2d) {
    let mut rng = StdRng::seed_from_u64(seed);
    sketch.setup(&mut rng);
    debug!(seed, frames, "sketch set up");

    for frame in 0..frames {
        sketch.update();
        sketch.draw(canvas);
        debug!(frame, "frame drawn");
    }
}
