//! Paint styles and image handles passed to a [`Canvas2d`](super::Canvas2d).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB color with alpha.
///
/// Displays as a CSS `rgba(...)` string, which is what a browser canvas
/// accepts for `fillStyle` and `strokeStyle`.
///
/// # Example
///
/// ```rust
/// use trigrid::Color;
///
/// assert_eq!(Color::rgb(0, 200, 255).to_string(), "rgba(0, 200, 255, 1)");
/// assert_eq!(Color::grey(0x33), Color::rgb(0x33, 0x33, 0x33));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity in `[0, 1]`
    pub a: f64,
}

impl Color {
    /// `black`
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// `white`
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// `red`
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// `blue`
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// `cyan`
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// `magenta`
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// `yellow`
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// `pink`
    pub const PINK: Self = Self::rgb(255, 192, 203);
    /// `gray`
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit opacity, clamped to `[0, 1]`.
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Opaque grey with all channels set to `level`.
    pub const fn grey(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Same color with a different opacity.
    pub fn with_alpha(self, a: f64) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Converts to the `[0, 1]` float channels GPU buffers use.
    pub fn to_f32(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            self.a as f32,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Canvas `globalCompositeOperation` values used by the sketches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeOp {
    /// Draw over existing content (canvas default).
    #[default]
    SourceOver,
    /// Draw only where existing content is; used to fill clipped triangles.
    SourceAtop,
    /// Add color values.
    Lighter,
    /// Keep the darker of source and destination.
    Darken,
    /// Keep the lighter of source and destination.
    Lighten,
    /// Multiply source and destination.
    Multiply,
}

impl CompositeOp {
    /// CSS keyword accepted by `globalCompositeOperation`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::SourceAtop => "source-atop",
            Self::Lighter => "lighter",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::Multiply => "multiply",
        }
    }
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque handle to an image the host has loaded.
///
/// The host maps `id` to an actual bitmap; this crate only needs the size to
/// pick source rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSource {
    /// Host-side identifier
    pub id: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageSource {
    /// Creates an image handle.
    pub const fn new(id: u32, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }
}
