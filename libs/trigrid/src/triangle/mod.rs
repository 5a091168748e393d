//! # Regular Triangles
//!
//! The value type produced by the lattice: an equilateral triangle described
//! by its center, circumradius and rotation. Vertices and bounding boxes are
//! derived on demand and never stored.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// A 2D point. Pixel-mode queries return integral coordinates.
pub type Point = DVec2;

/// Rounds to the nearest integer, halves towards positive infinity.
///
/// Canvas pixel alignment uses this instead of [`f64::round`] so that the
/// rounding is translation invariant: shifting a point by a whole pixel
/// shifts its rounded position by exactly that pixel.
///
/// # Example
///
/// ```rust
/// use trigrid::triangle::round_pixel;
///
/// assert_eq!(round_pixel(51.96), 52.0);
/// assert_eq!(round_pixel(2.5), 3.0);
/// assert_eq!(round_pixel(-2.5), -2.0);
/// ```
#[inline]
pub fn round_pixel(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// How a grid reports coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordMode {
    /// Every coordinate is snapped to the nearest integer pixel.
    #[default]
    Pixel,
    /// Coordinates are left real-valued for continuous consumers.
    Continuous,
}

impl CoordMode {
    /// Maps the `pixel_snap` configuration flag to a mode.
    pub fn from_snap(pixel_snap: bool) -> Self {
        if pixel_snap {
            Self::Pixel
        } else {
            Self::Continuous
        }
    }

    /// Applies this mode to a point.
    #[inline]
    pub fn snap(self, point: Point) -> Point {
        match self {
            Self::Pixel => DVec2::new(round_pixel(point.x), round_pixel(point.y)),
            Self::Continuous => point,
        }
    }
}

/// Which way a triangle's apex points on a y-down canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Apex above the base (`theta = -π/2`).
    Up,
    /// Apex below the base (`theta = +π/2`).
    Down,
}

impl Orientation {
    /// Rotation fed into vertex generation for this orientation.
    pub fn theta(self) -> f64 {
        match self {
            Self::Up => -FRAC_PI_2,
            Self::Down => FRAC_PI_2,
        }
    }

    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Axis-aligned rectangle, used for bounding boxes and image slices.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge (y grows downwards on a canvas)
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing every point, or `None` for an empty set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trigrid::triangle::{Point, Rect};
    ///
    /// let rect = Rect::enclosing([Point::new(1.0, 4.0), Point::new(-2.0, 0.0)]).unwrap();
    /// assert_eq!(rect, Rect::new(-2.0, 0.0, 3.0, 4.0));
    /// ```
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;

        // Naive min/max scan, no assumption about the shape
        let (min, max) = points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));

        Some(Self::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    /// Top-left corner.
    #[inline]
    pub fn min(&self) -> Point {
        DVec2::new(self.x, self.y)
    }

    /// Bottom-right corner.
    #[inline]
    pub fn max(&self) -> Point {
        DVec2::new(self.x + self.width, self.y + self.height)
    }

    /// Whether `point` lies inside or on the border.
    pub fn contains(&self, point: Point) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// An equilateral triangle: center, circumradius and rotation.
///
/// A pure value with no identity; recomputing it from the same grid cell
/// always yields the same triangle.
///
/// # Example
///
/// ```rust
/// use trigrid::triangle::{CoordMode, Point, Triangle};
/// use std::f64::consts::FRAC_PI_2;
///
/// let tri = Triangle::new(Point::ZERO, 10.0, -FRAC_PI_2, CoordMode::Pixel);
/// let [a, b, c] = tri.vertices();
/// assert_eq!(a, Point::new(0.0, -10.0));
/// assert_eq!(b, Point::new(9.0, 5.0));
/// assert_eq!(c, Point::new(-9.0, 5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// Center point
    pub center: Point,
    /// Distance from the center to each vertex
    pub radius: f64,
    /// Angle of vertex 0, in radians
    pub theta: f64,
    /// Whether vertices are pixel-snapped
    pub mode: CoordMode,
}

impl Triangle {
    /// Creates a triangle.
    pub fn new(center: Point, radius: f64, theta: f64, mode: CoordMode) -> Self {
        Self {
            center,
            radius,
            theta,
            mode,
        }
    }

    /// The three vertices, vertex `k` at angle `theta + k·2π/3`.
    ///
    /// The order is fixed; clip paths and face winding depend on it. In pixel
    /// mode each coordinate is rounded on its own.
    pub fn vertices(&self) -> [Point; 3] {
        std::array::from_fn(|k| {
            let angle = self.theta + k as f64 * TAU / 3.0;
            self.mode
                .snap(self.center + self.radius * DVec2::new(angle.cos(), angle.sin()))
        })
    }

    /// Axis-aligned box around the three vertices.
    pub fn bounding_box(&self) -> Rect {
        let [a, b, c] = self.vertices();
        let min = a.min(b).min(c);
        let max = a.max(b).max(c);
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Up or down, judged from where vertex 0 sits relative to the center.
    pub fn orientation(&self) -> Orientation {
        if self.theta.sin() < 0.0 {
            Orientation::Up
        } else {
            Orientation::Down
        }
    }

    /// Whether `point` is inside the triangle or on one of its edges.
    pub fn contains(&self, point: Point) -> bool {
        let [a, b, c] = self.vertices();
        let d0 = (b - a).perp_dot(point - a);
        let d1 = (c - b).perp_dot(point - b);
        let d2 = (a - c).perp_dot(point - c);

        if d0.is_nan() || d1.is_nan() || d2.is_nan() {
            return false;
        }

        let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
        !(has_neg && has_pos)
    }
}
