//! Sketch registry: names every sketch and builds it for a canvas.

use crate::circles::{CircleGrid, CircleOverlap};
use crate::drips::{DipLines, Drips};
use crate::error::SketchError;
use crate::pieces::ImagePieces;
use crate::splotches::Splotches;
use crate::triangles::{TriangleGrid, TriangleOverlap, TriangleTransfer};
use crate::Sketch;
use std::fmt;
use std::str::FromStr;
use trigrid::ImageSource;

/// Every available sketch.
///
/// # Example
///
/// ```rust
/// use sketches::SketchKind;
///
/// let kind: SketchKind = "circle-grid".parse().unwrap();
/// assert_eq!(kind, SketchKind::CircleGrid);
/// assert_eq!(kind.to_string(), "circle-grid");
/// assert!("spirals".parse::<SketchKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SketchKind {
    /// Five large dips
    Drips,
    /// Stacked dip lines
    DipLines,
    /// Interfering dot grids
    CircleGrid,
    /// Chain of circles
    CircleOverlap,
    /// Chain of triangles
    TriangleOverlap,
    /// Additive dot clusters
    Splotches,
    /// Twelve colored grid triangles
    TriangleGrid,
    /// Image slices clipped into grid triangles
    TriangleTransfer,
    /// Tinted image slice grid
    ImagePieces,
}

impl SketchKind {
    /// All sketches, in menu order.
    pub const ALL: [SketchKind; 9] = [
        Self::Drips,
        Self::DipLines,
        Self::CircleGrid,
        Self::CircleOverlap,
        Self::TriangleOverlap,
        Self::Splotches,
        Self::TriangleGrid,
        Self::TriangleTransfer,
        Self::ImagePieces,
    ];

    /// Name used in URLs and host APIs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Drips => "drips",
            Self::DipLines => "dip-lines",
            Self::CircleGrid => "circle-grid",
            Self::CircleOverlap => "circle-overlap",
            Self::TriangleOverlap => "triangle-overlap",
            Self::Splotches => "splotches",
            Self::TriangleGrid => "triangle-grid",
            Self::TriangleTransfer => "triangle-transfer",
            Self::ImagePieces => "image-pieces",
        }
    }

    /// Whether the sketch draws from a host image.
    pub fn uses_image(self) -> bool {
        matches!(self, Self::TriangleTransfer | Self::ImagePieces)
    }

    /// Builds the sketch for a `width × height` canvas. Image sketches get
    /// image `0`, assumed to be canvas-sized.
    pub fn build(self, width: u32, height: u32) -> Box<dyn Sketch> {
        self.build_with_image(width, height, ImageSource::new(0, width, height))
    }

    /// Builds the sketch, handing `image` to sketches that draw one.
    pub fn build_with_image(self, width: u32, height: u32, image: ImageSource) -> Box<dyn Sketch> {
        let (w, h) = (f64::from(width), f64::from(height));
        match self {
            Self::Drips => Box::new(Drips::new(w, h)),
            Self::DipLines => Box::new(DipLines::new(w, h)),
            Self::CircleGrid => Box::new(CircleGrid::new(w, h)),
            Self::CircleOverlap => Box::new(CircleOverlap::new(w, h)),
            Self::TriangleOverlap => Box::new(TriangleOverlap::new(w, h)),
            Self::Splotches => Box::new(Splotches::new(w, h)),
            Self::TriangleGrid => Box::new(TriangleGrid::new(w, h)),
            Self::TriangleTransfer => Box::new(TriangleTransfer::new(w, h, image)),
            Self::ImagePieces => Box::new(ImagePieces::new(w, h, image)),
        }
    }
}

impl fmt::Display for SketchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SketchKind {
    type Err = SketchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| SketchError::UnknownSketch(s.to_string()))
    }
}
