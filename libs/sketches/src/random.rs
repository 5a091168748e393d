//! Small sampling helpers shared by the sketches.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::f64::consts::TAU;
use trigrid::Point;

/// Uniform value in `[low, high)`; returns `low` when the interval is empty.
///
/// # Example
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use sketches::random::between;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let v = between(&mut rng, -30.0, 80.0);
/// assert!((-30.0..80.0).contains(&v));
/// ```
pub fn between(rng: &mut dyn RngCore, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.gen::<f64>()
}

/// A uniformly random point on the circle of `radius` around `center`.
pub fn edge_point(rng: &mut dyn RngCore, center: Point, radius: f64) -> Point {
    let angle = rng.gen::<f64>() * TAU;
    center + radius * Point::new(angle.cos(), angle.sin())
}

/// One element of `items` at random, `None` if empty.
pub fn pick<'a, T>(rng: &mut dyn RngCore, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}
